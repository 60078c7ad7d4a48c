use crate::feed::PriceSnapshot;

/// Label heading every notification.
const MESSAGE_HEADER: &str = "Namchiang";

/// Render the notification text for a snapshot.
pub fn format_message(snapshot: &PriceSnapshot) -> String {
    format!(
        "{}\n{}/{}\n{} | {}",
        MESSAGE_HEADER, snapshot.buy_price, snapshot.sale_price, snapshot.gold_spot, snapshot.usd_thb,
    )
}
