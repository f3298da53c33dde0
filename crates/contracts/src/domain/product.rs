use serde::{Deserialize, Serialize};

use super::category::CategoryType;

/// Category reference carried by a product. Reads come back with the name
/// and tipo embedded for display; writes serialize only `{ "id": … }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tipo: Option<CategoryType>,
}

impl CategoryRef {
    pub fn by_id(id: i64) -> Self {
        Self {
            id,
            nombre: None,
            tipo: None,
        }
    }
}

/// A catalog product. `id` is server-assigned and absent until persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub nombre: String,
    pub referencia: String,
    #[serde(rename = "valorCompra")]
    pub valor_compra: f64,
    #[serde(rename = "valorVenta")]
    pub valor_venta: f64,
    pub cantidad: i64,
    #[serde(rename = "aplicaGanancia")]
    pub aplica_ganancia: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub categoria: Option<CategoryRef>,
}

/// Field state of the product form. Free-text inputs stay as strings until
/// submit; parsing happens inside [`ProductDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub nombre: String,
    pub referencia: String,
    pub valor_compra: String,
    pub valor_venta: String,
    pub cantidad: String,
    pub categoria_id: String,
    pub aplica_ganancia: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            referencia: String::new(),
            valor_compra: String::new(),
            valor_venta: String::new(),
            // The quantity input starts at 0, not blank
            cantidad: "0".to_string(),
            categoria_id: String::new(),
            aplica_ganancia: false,
        }
    }
}

impl ProductDraft {
    pub fn from_record(record: &Product) -> Self {
        Self {
            nombre: record.nombre.clone(),
            referencia: record.referencia.clone(),
            valor_compra: record.valor_compra.to_string(),
            valor_venta: record.valor_venta.to_string(),
            cantidad: record.cantidad.to_string(),
            categoria_id: record
                .categoria
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            aplica_ganancia: record.aplica_ganancia,
        }
    }

    /// Validates the draft and builds the wire payload (without id).
    ///
    /// Rules run in order, first failure wins. The two currency fields must
    /// parse and be strictly positive; a non-numeric cantidad is treated as
    /// 0 rather than rejected. Nothing compares compra against venta.
    pub fn validate(&self) -> Result<Product, String> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err("Nombre es requerido".to_string());
        }
        let referencia = self.referencia.trim();
        if referencia.is_empty() {
            return Err("Referencia es requerida".to_string());
        }
        let categoria_id: i64 = self
            .categoria_id
            .trim()
            .parse()
            .map_err(|_| "Seleccione una categoría".to_string())?;

        let valor_compra: f64 = self
            .valor_compra
            .trim()
            .parse()
            .map_err(|_| "Valor compra inválido".to_string())?;
        if !(valor_compra > 0.0) {
            return Err("Valor compra inválido".to_string());
        }
        let valor_venta: f64 = self
            .valor_venta
            .trim()
            .parse()
            .map_err(|_| "Valor venta inválido".to_string())?;
        if !(valor_venta > 0.0) {
            return Err("Valor venta inválido".to_string());
        }

        // Lenient on purpose: garbage quantity becomes 0, negatives are rejected.
        let cantidad: i64 = self.cantidad.trim().parse().unwrap_or(0);
        if cantidad < 0 {
            return Err("Cantidad no puede ser negativa".to_string());
        }

        Ok(Product {
            id: None,
            nombre: nombre.to_string(),
            referencia: referencia.to_string(),
            valor_compra,
            valor_venta,
            cantidad,
            aplica_ganancia: self.aplica_ganancia,
            categoria: Some(CategoryRef::by_id(categoria_id)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            nombre: "Café molido".to_string(),
            referencia: "CAF-001".to_string(),
            valor_compra: "10".to_string(),
            valor_venta: "15".to_string(),
            cantidad: "5".to_string(),
            categoria_id: "3".to_string(),
            aplica_ganancia: false,
        }
    }

    #[test]
    fn valid_draft_builds_payload() {
        let product = valid_draft().validate().unwrap();
        assert_eq!(product.nombre, "Café molido");
        assert_eq!(product.valor_compra, 10.0);
        assert_eq!(product.cantidad, 5);
        assert_eq!(product.categoria.unwrap().id, 3);
    }

    #[test]
    fn validation_order_is_nombre_referencia_categoria_precios() {
        let mut draft = ProductDraft::default();
        assert_eq!(draft.validate().unwrap_err(), "Nombre es requerido");
        draft.nombre = "Café".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Referencia es requerida");
        draft.referencia = "CAF-001".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Seleccione una categoría");
        draft.categoria_id = "3".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Valor compra inválido");
        draft.valor_compra = "10".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Valor venta inválido");
    }

    #[test]
    fn currency_must_be_strictly_positive() {
        let mut draft = valid_draft();
        draft.valor_compra = "0".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Valor compra inválido");

        let mut draft = valid_draft();
        draft.valor_venta = "-1".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Valor venta inválido");

        let mut draft = valid_draft();
        draft.valor_compra = "abc".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Valor compra inválido");
    }

    #[test]
    fn non_numeric_cantidad_defaults_to_zero() {
        let mut draft = valid_draft();
        draft.cantidad = "muchos".to_string();
        assert_eq!(draft.validate().unwrap().cantidad, 0);
    }

    #[test]
    fn negative_cantidad_is_rejected() {
        let mut draft = valid_draft();
        draft.cantidad = "-2".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            "Cantidad no puede ser negativa"
        );
    }

    #[test]
    fn compra_above_venta_is_accepted() {
        // Intentionally unvalidated business asymmetry.
        let mut draft = valid_draft();
        draft.valor_compra = "10".to_string();
        draft.valor_venta = "8".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn payload_nests_categoria_as_bare_id() {
        let product = valid_draft().validate().unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["categoria"], serde_json::json!({ "id": 3 }));
        assert!(json.get("id").is_none());
        assert_eq!(json["valorCompra"], serde_json::json!(10.0));
        assert_eq!(json["aplicaGanancia"], serde_json::json!(false));
    }

    #[test]
    fn read_side_keeps_embedded_categoria_for_display() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 9,
                "nombre": "Café molido",
                "referencia": "CAF-001",
                "valorCompra": 10.0,
                "valorVenta": 15.0,
                "cantidad": 5,
                "aplicaGanancia": true,
                "categoria": { "id": 3, "nombre": "Bebidas", "tipo": "PRODUCTO" }
            }"#,
        )
        .unwrap();
        let categoria = product.categoria.unwrap();
        assert_eq!(categoria.nombre.as_deref(), Some("Bebidas"));
        assert_eq!(categoria.tipo, Some(CategoryType::Producto));
    }

    #[test]
    fn draft_from_record_without_categoria() {
        let record = Product {
            id: Some(1),
            nombre: "Café".to_string(),
            referencia: "CAF-001".to_string(),
            valor_compra: 10.0,
            valor_venta: 15.0,
            cantidad: 0,
            aplica_ganancia: false,
            categoria: None,
        };
        let draft = ProductDraft::from_record(&record);
        assert_eq!(draft.categoria_id, "");
        assert_eq!(draft.cantidad, "0");
    }
}
