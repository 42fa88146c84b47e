use serde::Serialize;

/// A recommended company shown on the storefront. This list is static
/// marketing content compiled into the binary; it has no table.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub discount: String,
    pub purity: String,
    pub features: Vec<String>,
    pub website: String,
    pub rating: f64,
    pub recommended: bool,
}

/// The recommended-company list served by `GET /catalog/v1/companies`.
pub fn recommended_companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "Science.bio".into(),
            description: "My #1 SARMs source".into(),
            discount: "SM10 for 10% off".into(),
            purity: "99%+ pure verified purity".into(),
            features: vec![
                "Tested, 99%+ purity".into(),
                "SARMs in powder and liquid form".into(),
                "Huge variety of other products".into(),
                "Great customer support".into(),
                "Very good shipping experience".into(),
            ],
            website: "https://science.bio".into(),
            rating: 5.0,
            recommended: true,
        },
        Company {
            id: 2,
            name: "Chemyo".into(),
            description: "Reliable SARMs vendor".into(),
            discount: "SAVE15 for 15% off".into(),
            purity: "99%+ pure verified".into(),
            features: vec![
                "Third-party tested".into(),
                "Fast shipping".into(),
                "Excellent customer service".into(),
                "Wide product selection".into(),
            ],
            website: "https://chemyo.com".into(),
            rating: 4.5,
            recommended: true,
        },
    ]
}
