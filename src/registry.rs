use std::sync::{Arc, PoisonError, RwLock};
use async_channel::{Receiver, Sender};
use log::{debug, trace};

use super::palette::*;

/// Change notification sent to [`PaletteRegistry::subscribe`] receivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
    Selected(PaletteKind),
    Replaced(PaletteKind),
}

/// Owns one palette of every kind and tracks which one is active.
#[derive(Debug)]
pub struct PaletteRegistry {
    // indexed by `PaletteKind as usize`
    slots: [Arc<PaletteVariant>; PaletteKind::ALL.len()],
    selection: PaletteKind,
    active: Arc<PaletteVariant>,
    subscribers: Vec<Sender<PaletteEvent>>,
}

impl PaletteRegistry {
    pub fn new() -> Self {
        Self::with_palettes(
            CosinePalette::default(),
            TwoColorPalette::default(),
            MultiColorPalette::default(),
        )
    }

    pub fn with_palettes(
        cosine: CosinePalette,
        two_color: TwoColorPalette,
        multi_color: MultiColorPalette,
    ) -> Self {
        let slots: [Arc<PaletteVariant>; PaletteKind::ALL.len()] = [
            Arc::new(cosine.into()),
            Arc::new(two_color.into()),
            Arc::new(multi_color.into()),
        ];

        let selection = PaletteKind::default();
        let active = Arc::clone(&slots[selection as usize]);

        PaletteRegistry { slots, selection, active, subscribers: Vec::new() }
    }

    pub fn selection(&self) -> PaletteKind {
        self.selection
    }

    pub fn active(&self) -> &PaletteVariant {
        &self.active
    }

    /// Shared handle to the active palette, unaffected by later selections.
    pub fn snapshot(&self) -> Arc<PaletteVariant> {
        Arc::clone(&self.active)
    }

    pub fn get(&self, kind: PaletteKind) -> &PaletteVariant {
        &self.slots[kind as usize]
    }

    pub fn select(&mut self, kind: PaletteKind) {
        self.selection = kind;
        self.active = Arc::clone(&self.slots[kind as usize]);
        debug!("selected {} palette", kind);
        self.notify(PaletteEvent::Selected(kind));
    }

    /// Replaces the slot matching the palette's kind.
    ///
    /// If that slot is the active one, the active palette is refreshed as well.
    pub fn replace(&mut self, palette: impl Into<PaletteVariant>) {
        let palette: PaletteVariant = palette.into();
        let kind = palette.kind();

        self.slots[kind as usize] = Arc::new(palette);
        if kind == self.selection {
            self.active = Arc::clone(&self.slots[kind as usize]);
        }
        debug!("replaced {} palette", kind);
        self.notify(PaletteEvent::Replaced(kind));
    }

    pub fn subscribe(&mut self) -> Receiver<PaletteEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: PaletteEvent) {
        self.subscribers.retain(|tx| match tx.try_send(event) {
            Ok(()) => true,
            Err(_) => {
                trace!("dropping closed palette subscriber");
                false
            }
        });
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        PaletteRegistry::new()
    }
}

/// A [`PaletteRegistry`] shared between threads.
///
/// Readers should take one [`snapshot`](SharedRegistry::snapshot) per frame and sample from
/// it, rather than going through the lock for every color.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry(Arc<RwLock<PaletteRegistry>>);

impl SharedRegistry {
    pub fn new(registry: PaletteRegistry) -> Self {
        SharedRegistry(Arc::new(RwLock::new(registry)))
    }

    // Every mutation leaves the registry consistent, so a poisoned lock is still usable.
    fn read<T>(&self, f: impl FnOnce(&PaletteRegistry) -> T) -> T {
        f(&*self.0.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write<T>(&self, f: impl FnOnce(&mut PaletteRegistry) -> T) -> T {
        f(&mut *self.0.write().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn snapshot(&self) -> Arc<PaletteVariant> {
        self.read(PaletteRegistry::snapshot)
    }

    pub fn selection(&self) -> PaletteKind {
        self.read(PaletteRegistry::selection)
    }

    /// Shared handle to the registry's palette of the given kind.
    pub fn get(&self, kind: PaletteKind) -> Arc<PaletteVariant> {
        self.read(|registry| Arc::clone(&registry.slots[kind as usize]))
    }

    pub fn select(&self, kind: PaletteKind) {
        self.write(|registry| registry.select(kind))
    }

    pub fn replace(&self, palette: impl Into<PaletteVariant>) {
        self.write(|registry| registry.replace(palette))
    }

    pub fn subscribe(&self) -> Receiver<PaletteEvent> {
        self.write(PaletteRegistry::subscribe)
    }
}

impl From<PaletteRegistry> for SharedRegistry {
    fn from(registry: PaletteRegistry) -> Self {
        SharedRegistry::new(registry)
    }
}
