use crate::feed::PriceSnapshot;

/// Buy/sale prices of the last snapshot that was successfully notified.
/// `None` until the first send succeeds, so the first fetch always differs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastNotified {
    prices: Option<PricePair>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricePair {
    pub buy_price: String,
    pub sale_price: String,
}

impl LastNotified {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &PriceSnapshot) -> Self {
        Self {
            prices: Some(PricePair {
                buy_price: snapshot.buy_price.clone(),
                sale_price: snapshot.sale_price.clone(),
            }),
        }
    }

    pub fn prices(&self) -> Option<&PricePair> {
        self.prices.as_ref()
    }

    /// Exact string comparison on buy and sale price only.
    pub fn has_changed(&self, snapshot: &PriceSnapshot) -> bool {
        match &self.prices {
            Some(last) => last.buy_price != snapshot.buy_price || last.sale_price != snapshot.sale_price,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(buy: &str, sale: &str) -> PriceSnapshot {
        PriceSnapshot {
            buy_price: buy.to_string(),
            sale_price: sale.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_state_always_changed() {
        assert!(LastNotified::new().has_changed(&snapshot("26500", "26600")));
        assert!(LastNotified::new().has_changed(&snapshot("", "")));
    }

    #[test]
    fn detects_buy_or_sale_change() {
        let last = LastNotified::from_snapshot(&snapshot("26500", "26600"));

        assert!(!last.has_changed(&snapshot("26500", "26600")));
        assert!(last.has_changed(&snapshot("26550", "26600")));
        assert!(last.has_changed(&snapshot("26500", "26650")));
    }

    #[test]
    fn ignores_other_fields() {
        let last = LastNotified::from_snapshot(&snapshot("26500", "26600"));
        let mut next = snapshot("26500", "26600");
        next.gold_spot = "2100.0".to_string();
        next.usd_thb = "37.0".to_string();
        next.nymex_crude = "80.1".to_string();

        assert!(!last.has_changed(&next));
    }

    #[test]
    fn comparison_is_textual() {
        let last = LastNotified::from_snapshot(&snapshot("26500", "26600"));
        assert!(last.has_changed(&snapshot("26500.00", "26600")));
    }
}
