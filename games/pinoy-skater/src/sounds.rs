//! Sound cue ids. The asset manifest binds each id to an audio file via
//! `event_id`.

use skate_engine::SoundEvent;

pub const OUCH: SoundEvent = SoundEvent(0);
pub const COIN: SoundEvent = SoundEvent(1);
pub const CANDY: SoundEvent = SoundEvent(2);
pub const CLICK: SoundEvent = SoundEvent(3);
pub const GAME_OVER: SoundEvent = SoundEvent(4);
/// Looping background track, started with each round.
pub const MUSIC_START: SoundEvent = SoundEvent(5);
