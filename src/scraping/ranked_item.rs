use crate::error::ScrapeError;

/// One entry of the best-seller list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    rank: usize,
    name: String,
    price: String,
    url: String,
}

impl RankedItem {
    /// Builds an item, rejecting a zero rank or a blank name or url.
    pub fn new(
        rank: usize,
        name: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, ScrapeError> {
        let name = name.into();
        let url = url.into();

        if rank == 0 {
            return Err(ScrapeError::parse("rank must start at 1"));
        }
        if name.trim().is_empty() {
            return Err(missing_field("name", rank));
        }
        if url.trim().is_empty() {
            return Err(missing_field("url", rank));
        }

        Ok(Self {
            rank,
            name,
            price: price.into(),
            url,
        })
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

pub(crate) fn missing_field(field: &str, rank: usize) -> ScrapeError {
    ScrapeError::parse(format!("value of field '{}' is missing (row {})", field, rank))
}

/// The extracted list together with the count that was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSellers {
    items: Vec<RankedItem>,
    requested: usize,
}

impl TopSellers {
    pub fn new(items: Vec<RankedItem>, requested: usize) -> Self {
        Self { items, requested }
    }

    pub fn items(&self) -> &[RankedItem] {
        &self.items
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Upper bound for selection. `RankedItem::new` rejects blank names, so
    /// every extracted item counts.
    pub fn effective_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_reduced(&self) -> bool {
        self.effective_count() < self.requested
    }

    /// Looks up an item by its 1-based position.
    pub fn get(&self, position: usize) -> Option<&RankedItem> {
        position.checked_sub(1).and_then(|index| self.items.get(index))
    }
}
