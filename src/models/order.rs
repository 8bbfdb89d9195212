use serde::{Deserialize, Serialize};

use crate::models::CartItem;

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Processing => "En proceso",
            Self::Completed => "Completado",
            Self::Cancelled => "Cancelado",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Processing => "status-processing",
            Self::Completed => "status-completed",
            Self::Cancelled => "status-cancelled",
        }
    }
}

/// Pedido de solo lectura para el cliente. La única transición iniciada
/// desde aquí es la cancelación, y solo sobre pedidos aún no despachados.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Order {
    /// El backend solo acepta cancelar pedidos pendientes o en proceso;
    /// la UI no ofrece el botón fuera de esos estados.
    pub fn can_cancel(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Processing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "o1".into(),
            items: vec![],
            total: 0.0,
            status,
            created_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_status_parses_lowercase() {
        let json = r#"{"id":"o1","items":[],"total":10.0,"status":"processing","createdAt":"2025-01-01T00:00:00Z"}"#;
        let parsed: Order = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, OrderStatus::Processing);
    }

    #[test]
    fn test_cancel_guard() {
        assert!(order(OrderStatus::Pending).can_cancel());
        assert!(order(OrderStatus::Processing).can_cancel());
        assert!(!order(OrderStatus::Completed).can_cancel());
        assert!(!order(OrderStatus::Cancelled).can_cancel());
    }
}
