/// Formatear un precio en rupias (el backend siempre cotiza en INR).
pub fn format_price(price: f64) -> String {
    format!("₹{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(25.0), "₹25.00");
        assert_eq!(format_price(9.995), "₹10.00");
        assert_eq!(format_price(0.0), "₹0.00");
    }
}
