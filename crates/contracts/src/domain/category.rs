use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category kind. Always upper-cased on the wire; parsing is
/// case-insensitive so form input like "producto" normalizes cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryType {
    #[serde(rename = "PRODUCTO")]
    Producto,
    #[serde(rename = "GASTO")]
    Gasto,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Producto => "PRODUCTO",
            CategoryType::Gasto => "GASTO",
        }
    }
}

impl FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PRODUCTO" => Ok(CategoryType::Producto),
            "GASTO" => Ok(CategoryType::Gasto),
            other => Err(format!("Tipo de categoría desconocido: {}", other)),
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog category. `id` is server-assigned and absent until persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub nombre: String,
    pub tipo: CategoryType,
}

/// Narrows a category list to the ones selectable on a product.
///
/// Products may only reference categories of tipo PRODUCTO; the filter is a
/// client-side responsibility, the server list is not trusted to be narrowed.
pub fn product_categories(all: Vec<Category>) -> Vec<Category> {
    all.into_iter()
        .filter(|c| c.tipo == CategoryType::Producto)
        .collect()
}

/// Field state of the category form. `tipo` holds the raw select value and
/// is normalized through [`CategoryType`] on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub nombre: String,
    pub tipo: String,
}

impl CategoryDraft {
    pub fn from_record(record: &Category) -> Self {
        Self {
            nombre: record.nombre.clone(),
            tipo: record.tipo.as_str().to_string(),
        }
    }

    /// Validates the draft and builds the wire payload (without id).
    /// The first failing rule wins; its message is user-facing.
    pub fn validate(&self) -> Result<Category, String> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err("Nombre es requerido".to_string());
        }
        if self.tipo.trim().is_empty() {
            return Err("Seleccione un tipo".to_string());
        }
        let tipo: CategoryType = self.tipo.parse()?;
        Ok(Category {
            id: None,
            nombre: nombre.to_string(),
            tipo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_parses_case_insensitively() {
        assert_eq!("producto".parse::<CategoryType>(), Ok(CategoryType::Producto));
        assert_eq!("PRODUCTO".parse::<CategoryType>(), Ok(CategoryType::Producto));
        assert_eq!("Gasto".parse::<CategoryType>(), Ok(CategoryType::Gasto));
        assert!("otro".parse::<CategoryType>().is_err());
    }

    #[test]
    fn tipo_serializes_upper_cased() {
        let draft = CategoryDraft {
            nombre: "Bebidas".to_string(),
            tipo: "producto".to_string(),
        };
        let payload = draft.validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "nombre": "Bebidas", "tipo": "PRODUCTO" }));
    }

    #[test]
    fn draft_requires_nombre_first() {
        let draft = CategoryDraft {
            nombre: "   ".to_string(),
            tipo: String::new(),
        };
        assert_eq!(draft.validate().unwrap_err(), "Nombre es requerido");
    }

    #[test]
    fn draft_requires_tipo() {
        let draft = CategoryDraft {
            nombre: "Renta".to_string(),
            tipo: String::new(),
        };
        assert_eq!(draft.validate().unwrap_err(), "Seleccione un tipo");
    }

    #[test]
    fn draft_trims_nombre() {
        let draft = CategoryDraft {
            nombre: "  Renta  ".to_string(),
            tipo: "GASTO".to_string(),
        };
        assert_eq!(draft.validate().unwrap().nombre, "Renta");
    }

    #[test]
    fn persisted_record_round_trips() {
        let record: Category =
            serde_json::from_str(r#"{"id":7,"nombre":"Bebidas","tipo":"PRODUCTO"}"#).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.tipo, CategoryType::Producto);
    }

    #[test]
    fn product_categories_drops_gasto() {
        let all = vec![
            Category { id: Some(1), nombre: "Bebidas".into(), tipo: CategoryType::Producto },
            Category { id: Some(2), nombre: "Renta".into(), tipo: CategoryType::Gasto },
        ];
        let filtered = product_categories(all);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nombre, "Bebidas");
    }

    #[test]
    fn draft_from_record_shows_stored_tipo() {
        let record = Category {
            id: Some(3),
            nombre: "Bebidas".into(),
            tipo: CategoryType::Producto,
        };
        let draft = CategoryDraft::from_record(&record);
        assert_eq!(draft.tipo, "PRODUCTO");
    }
}
