//! Per-kind id counters for emitted rows.

/// Row kinds that receive allocator-issued ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Brand,
    Image,
    Product,
    Size,
    Quantity,
}

impl EntityKind {
    /// First id issued for this kind.
    #[must_use]
    pub const fn start(self) -> i64 {
        match self {
            EntityKind::Brand | EntityKind::Image | EntityKind::Product => 1000,
            EntityKind::Size | EntityKind::Quantity => 100,
        }
    }
}

/// Issues strictly increasing ids per [`EntityKind`]. Ids are never reused,
/// including ids of slots the crawler later decides to skip.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    brand: i64,
    image: i64,
    product: i64,
    size: i64,
    quantity: i64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            brand: EntityKind::Brand.start(),
            image: EntityKind::Image.start(),
            product: EntityKind::Product.start(),
            size: EntityKind::Size.start(),
            quantity: EntityKind::Quantity.start(),
        }
    }
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current id for `kind` and advances its counter.
    pub fn next(&mut self, kind: EntityKind) -> i64 {
        let counter = self.counter_mut(kind);
        let id = *counter;
        *counter += 1;
        id
    }

    /// The id the next call to [`IdAllocator::next`] would return.
    #[must_use]
    pub fn peek(&self, kind: EntityKind) -> i64 {
        match kind {
            EntityKind::Brand => self.brand,
            EntityKind::Image => self.image,
            EntityKind::Product => self.product,
            EntityKind::Size => self.size,
            EntityKind::Quantity => self.quantity,
        }
    }

    fn counter_mut(&mut self, kind: EntityKind) -> &mut i64 {
        match kind {
            EntityKind::Brand => &mut self.brand,
            EntityKind::Image => &mut self.image,
            EntityKind::Product => &mut self.product,
            EntityKind::Size => &mut self.size,
            EntityKind::Quantity => &mut self.quantity,
        }
    }
}
