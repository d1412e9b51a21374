// SPDX-License-Identifier: MPL-2.0
//! The fixed set of promotional slides shown in the hero area.

/// Title and subtitle shown over a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub subtitle: String,
}

impl Caption {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Ordered sequence of slides. Each caption is one slide; indicators are
/// derived from the same sequence, so slide count, caption count, and
/// indicator count can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    captions: Vec<Caption>,
}

impl SlideDeck {
    #[must_use]
    pub fn new(captions: Vec<Caption>) -> Self {
        Self { captions }
    }

    /// The boutique's current promotions.
    #[must_use]
    pub fn promotional() -> Self {
        Self::new(vec![
            Caption::new(
                "Premium Gold Bars",
                "Invest in 24K pure gold of the highest quality",
            ),
            Caption::new(
                "Exclusive Gold Coins",
                "Collector and investment coins from around the world",
            ),
            Caption::new(
                "Handcrafted Jewellery",
                "Unique luxury pieces created by master goldsmiths",
            ),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    #[must_use]
    pub fn caption(&self, index: usize) -> Option<&Caption> {
        self.captions.get(index)
    }
}
