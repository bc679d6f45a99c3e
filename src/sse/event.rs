use std::time::Duration;

use rand::{seq::IndexedRandom, Rng};

/// One of the fixed frames the emitter sends.
///
/// `BazFrotz` carries a second line without a `data:` field name. SSE
/// clients treat `frotz` as an unknown field and only see `baz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Foo,
    Bar,
    BazFrotz,
}

pub const PAYLOADS: [Payload; 3] = [Payload::Foo, Payload::Bar, Payload::BazFrotz];

pub const DELAYS: [Duration; 8] = [
    Duration::from_millis(100),
    Duration::from_millis(200),
    Duration::from_millis(500),
    Duration::from_millis(700),
    Duration::from_millis(1000),
    Duration::from_millis(1500),
    Duration::from_millis(2000),
    Duration::from_millis(3000),
];

impl Payload {
    pub fn frame(&self) -> &'static str {
        match self {
            Payload::Foo => "data: foo\n\n",
            Payload::Bar => "data: bar\n\n",
            Payload::BazFrotz => "data: baz\nfrotz\n\n",
        }
    }
    pub fn as_bytes(&self) -> &'static [u8] {
        self.frame().as_bytes()
    }
    pub fn from_frame(frame: &str) -> Option<Self> {
        PAYLOADS.into_iter().find(|p| p.frame() == frame)
    }
}

pub fn choose_payload<R: Rng + ?Sized>(rng: &mut R) -> Payload {
    *PAYLOADS.choose(rng).unwrap_or(&Payload::Foo)
}

pub fn choose_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    *DELAYS.choose(rng).unwrap_or(&DELAYS[0])
}
