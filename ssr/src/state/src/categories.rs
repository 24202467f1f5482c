use std::future::Future;

use consts::endpoints;
use serde::{Deserialize, Serialize};
use utils::api::{get_json, ApiError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

pub trait CategoryProvider {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>>;
}

/// Categories from the backend's `GET /categories`
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCategories;

impl CategoryProvider for HttpCategories {
    async fn fetch_all(&self) -> Result<Vec<Category>, ApiError> {
        let categories: Vec<Category> = get_json(endpoints::CATEGORIES).await?;
        log::debug!("loaded {} categories", categories.len());
        Ok(categories)
    }
}

/// Loads the catalog once, logging and falling back to an empty list on
/// failure so the form still renders.
pub async fn load_categories<P: CategoryProvider>(provider: &P) -> Vec<Category> {
    match provider.fetch_all().await {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("failed to fetch categories: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    struct Fixed(Result<Vec<Category>, ApiError>);

    impl CategoryProvider for Fixed {
        async fn fetch_all(&self) -> Result<Vec<Category>, ApiError> {
            self.0.clone()
        }
    }

    #[test]
    fn keeps_backend_order() {
        let provider = Fixed(Ok(vec![
            Category {
                id: 3,
                name: "Gaming".into(),
            },
            Category {
                id: 1,
                name: "Music".into(),
            },
        ]));
        let names: Vec<_> = block_on(load_categories(&provider))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Gaming", "Music"]);
    }

    #[test]
    fn failure_yields_empty_catalog() {
        let provider = Fixed(Err(ApiError::Network("offline".into())));
        assert!(block_on(load_categories(&provider)).is_empty());
    }

    #[test]
    fn decodes_backend_payload() {
        let parsed: Vec<Category> =
            serde_json::from_str(r#"[{"id":1,"name":"Music","description":"ignored"}]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Category {
                id: 1,
                name: "Music".into()
            }]
        );
    }
}
