//! Shipment metadata passed through to every sticker

use chrono::{Local, NaiveDate};

/// Default sender address block printed in the "From" row
pub const DEFAULT_FROM_ADDR: &str = "Fresh Electric for Home Appliances\n\
    10th of Ramadan City, Egypt.\n \
    P.O.Box: 122                              انتاج شركة فريش / صنع فى مصر\n\
    Tel      .:+2 015 410 546 - 015 410 399\n \
    www.fresh.com.eg";

/// Placeholder recipient address used when none is supplied
pub const DEFAULT_TO_ADDR: &str = "Customer / Plant\nCity, Country\nContact / Phone";

/// Shipment-level fields repeated on every sticker.
///
/// Free-form pass-through data; the parsing core never touches these.
#[derive(Debug, Clone)]
pub struct ShipmentDetails {
    pub packing_list_no: String,
    pub order_no: String,
    pub ship_date: NaiveDate,
    pub modele: String,
    /// Multi-line sender address
    pub from_addr: String,
    /// Multi-line recipient address
    pub to_addr: String,
}

impl ShipmentDetails {
    /// Ship date as printed on the sticker
    pub fn ship_date_text(&self) -> String {
        self.ship_date.format("%Y-%m-%d").to_string()
    }
}

impl Default for ShipmentDetails {
    fn default() -> Self {
        Self {
            packing_list_no: String::new(),
            order_no: String::new(),
            ship_date: Local::now().date_naive(),
            modele: String::new(),
            from_addr: DEFAULT_FROM_ADDR.to_string(),
            to_addr: DEFAULT_TO_ADDR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_date_format() {
        let details = ShipmentDetails {
            ship_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            ..Default::default()
        };
        assert_eq!(details.ship_date_text(), "2026-08-03");
    }
}
