// GENERATED FILE - DO NOT EDIT
// Source: soundbanks/GeneratedSoundBanks/Wwise_IDs.h
// Generator: tools/ids-gen

/// Identifiers from the `EVENTS` namespace
pub mod events {
    use crate::{IdEntry, UniqueId};

    pub const PLAY_AMB_ROOM2_LP: UniqueId = 2291298689;
    pub const PLAY_AMB_ROOM_LP: UniqueId = 3112684807;
    pub const PLAY_MUS_4_4_100BPM_THEME_NL: UniqueId = 513704729;
    pub const PLAY_SFX_BUNNYABSORB_NL: UniqueId = 1567933058;
    pub const PLAY_SFX_BUNNYIMPACT_NL: UniqueId = 4038925685;
    pub const PLAY_SFX_BUNNYMOVE_NL: UniqueId = 1400485278;
    pub const PLAY_SFX_BUNNYROLL_NL: UniqueId = 4212669292;
    pub const PLAY_SFX_WOODBLOCK_IMPACT_WOOD: UniqueId = 841695155;

    pub const ENTRIES: &[IdEntry] = &[
        IdEntry { name: "PLAY_AMB_ROOM2_LP", value: PLAY_AMB_ROOM2_LP },
        IdEntry { name: "PLAY_AMB_ROOM_LP", value: PLAY_AMB_ROOM_LP },
        IdEntry { name: "PLAY_MUS_4_4_100BPM_THEME_NL", value: PLAY_MUS_4_4_100BPM_THEME_NL },
        IdEntry { name: "PLAY_SFX_BUNNYABSORB_NL", value: PLAY_SFX_BUNNYABSORB_NL },
        IdEntry { name: "PLAY_SFX_BUNNYIMPACT_NL", value: PLAY_SFX_BUNNYIMPACT_NL },
        IdEntry { name: "PLAY_SFX_BUNNYMOVE_NL", value: PLAY_SFX_BUNNYMOVE_NL },
        IdEntry { name: "PLAY_SFX_BUNNYROLL_NL", value: PLAY_SFX_BUNNYROLL_NL },
        IdEntry { name: "PLAY_SFX_WOODBLOCK_IMPACT_WOOD", value: PLAY_SFX_WOODBLOCK_IMPACT_WOOD },
    ];
}

/// Identifiers from the `GAME_PARAMETERS` namespace
pub mod game_parameters {
    use crate::{IdEntry, UniqueId};

    pub const VELOCITY: UniqueId = 3519441192;

    pub const ENTRIES: &[IdEntry] = &[
        IdEntry { name: "VELOCITY", value: VELOCITY },
    ];
}

/// Identifiers from the `BUSSES` namespace
pub mod busses {
    use crate::{IdEntry, UniqueId};

    pub const MAIN_AUDIO_BUS: UniqueId = 2246998526;

    pub const ENTRIES: &[IdEntry] = &[
        IdEntry { name: "MAIN_AUDIO_BUS", value: MAIN_AUDIO_BUS },
    ];
}

/// Identifiers from the `AUX_BUSSES` namespace
pub mod aux_busses {
    use crate::{IdEntry, UniqueId};

    pub const ROOM: UniqueId = 2077253480;

    pub const ENTRIES: &[IdEntry] = &[
        IdEntry { name: "ROOM", value: ROOM },
    ];
}

/// Identifiers from the `AUDIO_DEVICES` namespace
pub mod audio_devices {
    use crate::{IdEntry, UniqueId};

    pub const NO_OUTPUT: UniqueId = 2317455096;
    pub const SYSTEM: UniqueId = 3859886410;

    pub const ENTRIES: &[IdEntry] = &[
        IdEntry { name: "NO_OUTPUT", value: NO_OUTPUT },
        IdEntry { name: "SYSTEM", value: SYSTEM },
    ];
}
