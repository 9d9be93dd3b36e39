use anyhow::{Context, bail};
use hashbrown::HashMap;
use log::{info, warn};
use macroquad::audio::{Sound, load_sound, play_sound_once};

/// Upper bound on the number of sounds the director can hold.
pub const MAX_SOUNDS: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct SoundKey(pub &'static str);

/// Sounds requested by the game during a frame. The game never
/// touches the audio device: it only queues keys here and
/// the [SoundDirector] plays them after the frame is done.
#[derive(Clone, Debug, Default)]
pub struct SoundQueue {
    requests: Vec<SoundKey>,
}

impl SoundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, key: SoundKey) {
        self.requests.push(key);
    }

    pub fn requests(&self) -> &[SoundKey] {
        &self.requests
    }

    pub fn drain(&mut self) -> impl Iterator<Item = SoundKey> + '_ {
        self.requests.drain(..)
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

/// Bounded key-to-sound table.
#[derive(Debug)]
pub(crate) struct SoundTable<S> {
    slots: HashMap<SoundKey, S>,
}

impl<S> SoundTable<S> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: SoundKey, sound: S) -> anyhow::Result<()> {
        if !self.slots.contains_key(&key) && self.slots.len() >= MAX_SOUNDS {
            bail!("sound table is full ({MAX_SOUNDS} slots), can't add {:?}", key.0);
        }

        self.slots.insert(key, sound);
        Ok(())
    }

    pub(crate) fn get(&self, key: SoundKey) -> Option<&S> {
        self.slots.get(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Owns the sound effects. Playback is fire-and-forget.
/// When disabled, nothing gets loaded and every request
/// is ignored.
pub struct SoundDirector {
    enabled: bool,
    sounds: SoundTable<Sound>,
}

impl SoundDirector {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            sounds: SoundTable::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.len() == 0
    }

    pub async fn load_sound(&mut self, key: SoundKey, path: &str) -> anyhow::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let sound = load_sound(path)
            .await
            .with_context(|| format!("loading sound {path:?}"))?;
        self.sounds.insert(key, sound)?;
        info!("Loaded sound {:?}", key.0);

        Ok(())
    }

    /// Like [SoundDirector::load_sound], but a failure only
    /// leaves the slot empty.
    pub async fn load_sound_or_skip(&mut self, key: SoundKey, path: &str) {
        if let Err(e) = self.load_sound(key, path).await {
            warn!("{e:#}");
        }
    }

    pub fn play(&self, key: SoundKey) {
        if !self.enabled {
            return;
        }

        match self.sounds.get(key) {
            Some(sound) => play_sound_once(sound),
            None => warn!("No sound {:?}", key.0),
        }
    }

    pub fn direct_sounds(&mut self, queue: &mut SoundQueue) {
        for key in queue.drain() {
            self.play(key);
        }
    }
}
