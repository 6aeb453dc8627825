use std::any::Any;
use std::fmt::{Debug, Formatter};

use maybe_sync::{MaybeSend, MaybeSync};

use crate::layer::Layer;
use crate::messenger::Messenger;
use crate::render::RenderContext;
use crate::symbol::TacticalSymbol;

/// Ordered collection of tactical symbols rendered in a single pass.
///
/// Symbols are drawn in the order they are stored. Hidden symbols (see
/// [`Visible::set_visible`](crate::symbol::Visible::set_visible)) keep their place in the layer but draw nothing.
///
/// When a symbol is added, removed, or modified through [`SymbolContainerMut`], the layer asks its
/// [`Messenger`] for a redraw. A symbol dropped from the layer is gone: there is no separate disposal step.
///
/// ```
/// use symbology::layer::SymbolLayer;
/// use symbology::symbol::{BasicTacticalSymbol, Visible};
/// use symbology::symbology_types::latlonh;
///
/// let mut layer = SymbolLayer::default();
/// layer.insert(BasicTacticalSymbol::new("SFGPU----------", latlonh!(40.0, -120.0, 0.0)).unwrap());
///
/// if let Some(mut symbol) = layer.get_mut(0) {
///     symbol.as_mut().set_visible(false);
/// }
/// ```
pub struct SymbolLayer<S> {
    symbols: Vec<S>,
    messenger: Option<Box<dyn Messenger>>,
}

impl<S> Default for SymbolLayer<S> {
    fn default() -> Self {
        Self {
            symbols: vec![],
            messenger: None,
        }
    }
}

impl<S: Debug> Debug for SymbolLayer<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolLayer")
            .field("symbols", &self.symbols)
            .field("has_messenger", &self.messenger.is_some())
            .finish()
    }
}

/// Mutable container for a symbol in a [`SymbolLayer`].
///
/// Reference to the container can be converted into a reference to the symbol using [AsRef] and [AsMut] traits.
/// Taking a mutable reference notifies the layer messenger (once per container).
pub struct SymbolContainerMut<'a, S> {
    symbol: &'a mut S,
    index: usize,
    is_updated: bool,
    messenger: Option<&'a dyn Messenger>,
}

impl<S> SymbolContainerMut<'_, S> {
    /// Index of the symbol in the layer.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<S> AsRef<S> for SymbolContainerMut<'_, S> {
    fn as_ref(&self) -> &S {
        &*self.symbol
    }
}

impl<S> AsMut<S> for SymbolContainerMut<'_, S> {
    fn as_mut(&mut self) -> &mut S {
        if !self.is_updated {
            if let Some(messenger) = self.messenger {
                messenger.request_redraw();
            }
        }

        self.is_updated = true;
        &mut *self.symbol
    }
}

impl<S> SymbolLayer<S> {
    /// Creates a new layer with the given symbols.
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
            messenger: None,
        }
    }

    /// Adds a symbol to the end of the layer and returns its index.
    pub fn insert(&mut self, symbol: S) -> usize {
        self.symbols.push(symbol);
        self.request_redraw();
        self.symbols.len() - 1
    }

    /// Returns a reference to the symbol. Returns `None` if a symbol with the given `index` does not exist.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.symbols.get(index)
    }

    /// Returns a mutable container of the symbol. Returns `None` if a symbol with the given `index` does not exist.
    pub fn get_mut(&mut self, index: usize) -> Option<SymbolContainerMut<'_, S>> {
        let messenger = self.messenger.as_deref();
        self.symbols
            .get_mut(index)
            .map(|symbol| SymbolContainerMut {
                symbol,
                index,
                is_updated: false,
                messenger,
            })
    }

    /// Removes the symbol at `index`, shifting all symbols after it to the left, and returns it.
    ///
    /// Same as [`Vec::remove`]. Use [`SymbolLayer::try_remove`] when the index may be out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> S {
        let symbol = self.symbols.remove(index);
        self.request_redraw();
        symbol
    }

    /// Removes the symbol at `index`, shifting all symbols after it to the left, and returns it. Returns `None`
    /// and leaves the layer unchanged if a symbol with the given `index` does not exist.
    pub fn try_remove(&mut self, index: usize) -> Option<S> {
        if index < self.symbols.len() {
            Some(self.remove(index))
        } else {
            None
        }
    }

    /// Retains only the symbols specified by the predicate.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&S) -> bool,
    {
        let count = self.symbols.len();
        self.symbols.retain(f);
        if self.symbols.len() != count {
            self.request_redraw();
        }
    }

    /// Removes all symbols from the layer.
    pub fn clear(&mut self) {
        if !self.symbols.is_empty() {
            self.symbols.clear();
            self.request_redraw();
        }
    }

    /// Returns the count of symbols in the layer.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the layer contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over all symbols in the layer.
    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.symbols.iter()
    }

    /// Iterates over mutable containers of all symbols in the layer.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = SymbolContainerMut<'_, S>> + '_ {
        let messenger = self.messenger.as_deref();
        self.symbols
            .iter_mut()
            .enumerate()
            .map(move |(index, symbol)| SymbolContainerMut {
                symbol,
                index,
                is_updated: false,
                messenger,
            })
    }

    fn request_redraw(&self) {
        if let Some(messenger) = &self.messenger {
            log::debug!("Symbol layer requested redraw");
            messenger.request_redraw();
        }
    }
}

impl<S: TacticalSymbol> SymbolLayer<S> {
    /// Draws all visible symbols of the layer into the context.
    pub fn render(&self, context: &mut dyn RenderContext) {
        for symbol in &self.symbols {
            symbol.render(context);
        }

        log::debug!("Rendered symbol layer with {} symbols", self.symbols.len());
    }
}

impl<S> FromIterator<S> for SymbolLayer<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<S> Layer for SymbolLayer<S>
where
    S: TacticalSymbol + MaybeSend + MaybeSync + 'static,
{
    fn render(&self, context: &mut dyn RenderContext) {
        SymbolLayer::render(self, context)
    }

    fn set_messenger(&mut self, messenger: Box<dyn Messenger>) {
        self.messenger = Some(messenger);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;
    use symbology_types::{latlonh, AltitudeMode};

    use super::*;
    use crate::symbol::{keys, BasicTacticalSymbol, Modifiable, Positioned, Visible};
    use crate::tests::{init_logger, CountingMessenger, RecordingContext};

    fn symbol(identifier: &str) -> BasicTacticalSymbol {
        BasicTacticalSymbol::new(identifier, latlonh!(40.0, -120.0, 0.0)).expect("valid symbol")
    }

    fn layer_with_messenger() -> (SymbolLayer<BasicTacticalSymbol>, CountingMessenger) {
        let messenger = CountingMessenger::default();
        let mut layer = SymbolLayer::new([symbol("A"), symbol("B"), symbol("C")]);
        layer.set_messenger(Box::new(messenger.clone()));
        (layer, messenger)
    }

    #[test]
    fn renders_visible_symbols_in_order() {
        init_logger();
        let (mut layer, _) = layer_with_messenger();
        layer
            .get_mut(1)
            .expect("no symbol")
            .as_mut()
            .set_visible(false);

        let mut context = RecordingContext::default();
        layer.render(&mut context);

        let drawn: Vec<_> = context.drawn.iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(drawn, ["A", "C"]);
        assert_eq!(layer.len(), 3);
        assert_eq!(context.drawn[1].position, latlonh!(40.0, -120.0, 0.0));
        assert_eq!(context.drawn[1].altitude_mode, AltitudeMode::Absolute);
    }

    #[test]
    fn editing_requests_redraw() {
        let (mut layer, messenger) = layer_with_messenger();

        let mut container = layer.get_mut(0).expect("no symbol");
        assert_eq!(container.as_ref().identifier(), "A");
        assert_eq!(messenger.count(), 0);

        container
            .as_mut()
            .set_modifier(keys::SPEED, Some(20.into()))
            .expect("valid key");
        container
            .as_mut()
            .set_position(latlonh!(41.0, -121.0, 0.0))
            .expect("valid position");
        assert_eq!(messenger.count(), 1);

        assert_eq!(
            layer.get(0).expect("no symbol").position(),
            latlonh!(41.0, -121.0, 0.0)
        );
    }

    #[test]
    fn insert_and_remove() {
        let (mut layer, messenger) = layer_with_messenger();

        assert_eq!(layer.insert(symbol("D")), 3);
        assert_eq!(messenger.count(), 1);

        let removed = layer.remove(1);
        assert_eq!(removed.identifier(), "B");
        assert_eq!(messenger.count(), 2);

        let identifiers: Vec<_> = layer.iter().map(|s| s.identifier()).collect();
        assert_eq!(identifiers, ["A", "C", "D"]);
        assert!(layer.get(3).is_none());
        assert!(layer.get_mut(3).is_none());
    }

    #[test]
    fn try_remove_out_of_bounds() {
        let (mut layer, messenger) = layer_with_messenger();

        assert!(layer.try_remove(3).is_none());
        assert_eq!(layer.len(), 3);
        assert_eq!(messenger.count(), 0);

        let removed = layer.try_remove(2).expect("no symbol");
        assert_eq!(removed.identifier(), "C");
        assert_eq!(layer.len(), 2);
        assert_eq!(messenger.count(), 1);
    }

    #[test]
    fn retain_and_clear() {
        let (mut layer, messenger) = layer_with_messenger();

        layer.retain(|_| true);
        assert_eq!(messenger.count(), 0);

        layer.retain(|s| s.identifier() != "A");
        assert_eq!(layer.len(), 2);
        assert_eq!(messenger.count(), 1);

        layer.clear();
        assert!(layer.is_empty());
        assert_eq!(messenger.count(), 2);

        layer.clear();
        assert_eq!(messenger.count(), 2);
    }

    #[test]
    fn iter_mut_indices() {
        let (mut layer, messenger) = layer_with_messenger();
        for mut container in layer.iter_mut() {
            if container.index() == 2 {
                container.as_mut().set_show_text_modifiers(false);
            }
        }

        assert_eq!(messenger.count(), 1);
        assert!(!layer.get(2).expect("no symbol").is_show_text_modifiers());
        assert!(layer.get(0).expect("no symbol").is_show_text_modifiers());
    }

    #[test]
    fn shared_layer() {
        let layer = Arc::new(RwLock::new(SymbolLayer::from_iter([symbol("A")])));
        let mut as_layer: Box<dyn Layer> = Box::new(layer.clone());

        let messenger = CountingMessenger::default();
        as_layer.set_messenger(Box::new(messenger.clone()));
        layer.write().insert(symbol("B"));
        assert_eq!(messenger.count(), 1);

        let mut context = RecordingContext::default();
        as_layer.render(&mut context);
        assert_eq!(context.drawn.len(), 2);

        assert!(as_layer
            .as_any()
            .downcast_ref::<Arc<RwLock<SymbolLayer<BasicTacticalSymbol>>>>()
            .is_some());
    }
}
