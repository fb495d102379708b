//! Origins audio identifiers
//!
//! Compiled-in IDs exported by the Origins sound-design project, grouped by
//! category. Each ID is an opaque handle for the audio engine's runtime API
//! ("post this event", "set this game parameter", "route to this bus").
//!
//! The values are stable only for a given export. They are regenerated from
//! `soundbanks/GeneratedSoundBanks/Wwise_IDs.h` by `tools/ids-gen` and must
//! never be edited by hand or recomputed from their names.
//!
//! # Usage
//!
//! ```
//! use origins_audio_ids::{events, game_parameters};
//!
//! let roll = events::PLAY_SFX_BUNNYROLL_NL;
//! let velocity = game_parameters::VELOCITY;
//! assert_ne!(roll, velocity);
//! ```

#![cfg_attr(not(test), no_std)]

#[rustfmt::skip]
mod generated;

pub use generated::{audio_devices, aux_busses, busses, events, game_parameters};

/// Handle type accepted by the audio engine
pub type UniqueId = u32;

/// Named identifier, as listed in a category's `ENTRIES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdEntry {
    pub name: &'static str,
    pub value: UniqueId,
}

/// Identifier categories, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Events,
    GameParameters,
    Busses,
    AuxBusses,
    AudioDevices,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Events,
        Category::GameParameters,
        Category::Busses,
        Category::AuxBusses,
        Category::AudioDevices,
    ];

    /// Namespace label in the exported header
    pub const fn namespace(self) -> &'static str {
        match self {
            Category::Events => "EVENTS",
            Category::GameParameters => "GAME_PARAMETERS",
            Category::Busses => "BUSSES",
            Category::AuxBusses => "AUX_BUSSES",
            Category::AudioDevices => "AUDIO_DEVICES",
        }
    }

    pub const fn module_name(self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::GameParameters => "game_parameters",
            Category::Busses => "busses",
            Category::AuxBusses => "aux_busses",
            Category::AudioDevices => "audio_devices",
        }
    }

    /// Every identifier of this category, in export order
    pub const fn entries(self) -> &'static [IdEntry] {
        match self {
            Category::Events => events::ENTRIES,
            Category::GameParameters => game_parameters::ENTRIES,
            Category::Busses => busses::ENTRIES,
            Category::AuxBusses => aux_busses::ENTRIES,
            Category::AudioDevices => audio_devices::ENTRIES,
        }
    }
}
