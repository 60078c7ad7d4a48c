/// One parsed `<today>` document from the gold price feed.
/// Every field is kept as the exact text the feed published; nothing is
/// parsed as a number. Elements missing from the document are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSnapshot {
    pub sale_price: String,
    pub buy_price: String,
    pub buy_price_change: String,
    pub sum_of_change: String,
    pub usd_thb: String,
    pub usd_thb_change: String,
    pub gold_spot: String,
    pub gold_spot_change: String,
    pub nymex_crude: String,
    pub nymex_crude_change: String,
    pub sms: String,
    pub update: String,
}

impl PriceSnapshot {
    /// Field for a feed element name. Names match case-sensitively.
    pub fn field_mut(&mut self, element: &[u8]) -> Option<&mut String> {
        let field = match element {
            b"saleprice" => &mut self.sale_price,
            b"buyprice" => &mut self.buy_price,
            b"buypricechg" => &mut self.buy_price_change,
            b"SumOfChg" => &mut self.sum_of_change,
            b"usdthb" => &mut self.usd_thb,
            b"usdthbchg" => &mut self.usd_thb_change,
            b"goldspot" => &mut self.gold_spot,
            b"goldspotchg" => &mut self.gold_spot_change,
            b"nymexcrude" => &mut self.nymex_crude,
            b"nymexcrudechg" => &mut self.nymex_crude_change,
            b"sms" => &mut self.sms,
            b"update" => &mut self.update,
            _ => return None,
        };
        Some(field)
    }
}
