//! Sample dumps captured from `pacmd`, trimmed to the fields the parsers read

pub const LIST_CARDS: &str = "2 card(s) available.
    index: 0
	name: <alsa_card.pci-0000_00_1f.3>
	driver: <module-alsa-card.c>
	owner module: 7
	properties:
		alsa.card = \"0\"
		device.bus = \"pci\"
		device.form_factor = \"internal\"
		device.description = \"Built-in Audio\"
	profiles:
		input:analog-stereo: Analog Stereo Input (priority 65, available: unknown)
		output:analog-stereo: Analog Stereo Output (priority 6500, available: unknown)
		off: Off (priority 0, available: unknown)
	active profile: <output:analog-stereo+input:analog-stereo>
	sinks:
		alsa_output.pci-0000_00_1f.3.analog-stereo/#0: Built-in Audio Analog Stereo
	sources:
		alsa_output.pci-0000_00_1f.3.analog-stereo.monitor/#0: Monitor of Built-in Audio Analog Stereo
		alsa_input.pci-0000_00_1f.3.analog-stereo/#1: Built-in Audio Analog Stereo
	ports:
		analog-input-mic: Microphone (priority 8700, latency offset 0 usec, available: unknown)
			properties:
				device.icon_name = \"audio-input-microphone\"
    index: 5
	name: <bluez_card.00_1B_66_AA_BB_CC>
	driver: <module-bluez5-device.c>
	owner module: 27
	properties:
		device.description = \"Momentum TW\"
		device.bus = \"bluetooth\"
		device.form_factor = \"headset\"
	profiles:
		a2dp_sink_sbc: High Fidelity Playback (A2DP Sink, codec SBC) (priority 40, available: unknown)
		a2dp_sink_aac: High Fidelity Playback (A2DP Sink, codec AAC) (priority 40, available: unknown)
		a2dp_sink_xq: High Fidelity Playback (A2DP Sink, codec SBC-XQ) (priority 40, available: unknown)
		headset_head_unit: Headset Head Unit (HSP/HFP) (priority 30, available: unknown)
		off: Off (priority 0, available: yes)
	active profile: <a2dp_sink_sbc>
	sinks:
		bluez_sink.00_1B_66_AA_BB_CC.a2dp_sink/#3: Momentum TW
	sources:
		bluez_sink.00_1B_66_AA_BB_CC.a2dp_sink.monitor/#4: Monitor of Momentum TW
	ports:
		headset-output: Headset (priority 0, latency offset 0 usec, available: unknown)
";

pub const LIST_SOURCES: &str = "3 source(s) available.
    index: 0
	name: <alsa_output.pci-0000_00_1f.3.analog-stereo.monitor>
	driver: <module-alsa-card.c>
	state: SUSPENDED
	volume: front-left: 65536 / 100% / 0.00 dB,   front-right: 65536 / 100% / 0.00 dB
	muted: no
	monitor_of: 0
	card: 0 <alsa_card.pci-0000_00_1f.3>
  * index: 1
	name: <alsa_input.pci-0000_00_1f.3.analog-stereo>
	driver: <module-alsa-card.c>
	state: RUNNING
	volume: front-left: 49151 /  75% / -7.50 dB,   front-right: 49151 /  75% / -7.50 dB
	        balance 0.00
	muted: no
	card: 0 <alsa_card.pci-0000_00_1f.3>
	properties:
		device.description = \"Built-in Audio Analog Stereo\"
		device.bus = \"pci\"
		device.form_factor = \"internal\"
    index: 4
	name: <bluez_sink.00_1B_66_AA_BB_CC.a2dp_sink.monitor>
	driver: <module-bluez5-device.c>
	state: IDLE
	volume: front-left: 65535 / 100% / 0.00 dB
	muted: no
	monitor_of: 3
	card: 5 <bluez_card.00_1B_66_AA_BB_CC>
";

pub const LIST_SINKS: &str = "2 sink(s) available.
  * index: 0
	name: <alsa_output.pci-0000_00_1f.3.analog-stereo>
	driver: <module-alsa-card.c>
	state: IDLE
	volume: front-left: 32767 /  50% / -18.06 dB,   front-right: 32767 /  50% / -18.06 dB
	muted: no
	card: 0 <alsa_card.pci-0000_00_1f.3>
	properties:
		device.description = \"Built-in Audio Analog Stereo\"
		device.bus = \"pci\"
		device.form_factor = \"internal\"
    index: 3
	name: <bluez_sink.00_1B_66_AA_BB_CC.a2dp_sink>
	driver: <module-bluez5-device.c>
	state: RUNNING
	volume: front-left: 65535 / 100% / 0.00 dB,   front-right: 65535 / 100% / 0.00 dB
	muted: yes
	card: 5 <bluez_card.00_1B_66_AA_BB_CC>
	properties:
		bluetooth.protocol = \"a2dp_sink\"
		bluetooth.a2dp_codec = \"SBC\"
		device.description = \"Momentum TW\"
		device.bus = \"bluetooth\"
		device.form_factor = \"headset\"
";

pub const LIST_SINK_INPUTS: &str = "4 sink input(s) available.
    index: 11
	driver: <protocol-native.c>
	state: RUNNING
	sink: 0 <alsa_output.pci-0000_00_1f.3.analog-stereo>
	volume: front-left: 65536 / 100% / 0.00 dB
	client: 21 <Firefox>
	properties:
		application.name = \"Firefox\"
    index: 12
	driver: <protocol-native.c>
	state: RUNNING
	sink: 3 <bluez_sink.00_1B_66_AA_BB_CC.a2dp_sink>
	client: 22 <Spotify>
    index: 13
	driver: <protocol-native.c>
	sink: 0 <alsa_output.pci-0000_00_1f.3.analog-stereo>
	client: 23 <PulseAudio Volume Control>
    index: 14
	driver: <protocol-native.c>
	sink: 3 <bluez_sink.00_1B_66_AA_BB_CC.a2dp_sink>
	client: 24 <mpv>
";

pub const LIST_SOURCE_OUTPUTS: &str = "3 source output(s) available.
    index: 2
	driver: <protocol-native.c>
	source: 1 <alsa_input.pci-0000_00_1f.3.analog-stereo>
	client: 30 <Zoom>
    index: 3
	driver: <protocol-native.c>
	source: 0 <alsa_output.pci-0000_00_1f.3.analog-stereo.monitor>
	client: 31 <OBS>
    index: 4
	driver: <protocol-native.c>
	source: 6 <bluez_source.00_1B_66_AA_BB_CC.headset_head_unit>
	client: 32 <Discord>
";
