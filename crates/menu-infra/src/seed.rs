//! Mock menu and the simulated fetch that loads it.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use menu_core::DomainError;
use menu_core::domain::{Dish, DishCategory};
use menu_core::service::DishStore;

/// Delay of the simulated fetch.
pub const DEFAULT_SEED_DELAY: Duration = Duration::from_millis(1000);

struct SeedDish {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: DishCategory,
    photo: &'static str,
    created: (u32, u32),
}

const SEED: [SeedDish; 6] = [
    SeedDish {
        name: "Truffle Risotto",
        description: "Creamy arborio rice with black truffle, parmesan, and wild mushrooms",
        price: 28.99,
        category: DishCategory::Mains,
        photo: "photo-1582209853949-1b5e8c3a5d3e",
        created: (10, 30),
    },
    SeedDish {
        name: "Grilled Salmon",
        description: "Fresh Atlantic salmon with herb butter and roasted vegetables",
        price: 32.50,
        category: DishCategory::Mains,
        photo: "photo-1467003909585-2f8a72700288",
        created: (11, 15),
    },
    SeedDish {
        name: "Caesar Salad",
        description: "Crisp romaine lettuce with homemade croutons, parmesan, and caesar dressing",
        price: 16.99,
        category: DishCategory::Salads,
        photo: "photo-1551248429-40975aa4de74",
        created: (12, 0),
    },
    SeedDish {
        name: "Chocolate Lava Cake",
        description: "Warm chocolate cake with molten center, served with vanilla ice cream",
        price: 12.99,
        category: DishCategory::Desserts,
        photo: "photo-1624353365286-3f8d62daad51",
        created: (13, 45),
    },
    SeedDish {
        name: "Craft Beer Selection",
        description: "Local craft beer on tap - ask server for today's selection",
        price: 8.99,
        category: DishCategory::Beverages,
        photo: "photo-1608270586620-248524c67de9",
        created: (14, 20),
    },
    SeedDish {
        name: "Butternut Squash Soup",
        description: "Creamy roasted butternut squash soup with sage and pumpkin seeds",
        price: 9.99,
        category: DishCategory::Soups,
        photo: "photo-1476718406336-bb5a9690ee2a",
        created: (15, 10),
    },
];

fn seeded_at((hour, minute): (u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// The six starter dishes, each with a fresh id.
pub fn mock_dishes() -> Vec<Dish> {
    SEED.iter()
        .map(|seed| {
            let at = seeded_at(seed.created);
            Dish {
                id: Uuid::new_v4(),
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                price: seed.price,
                category: seed.category,
                image_url: format!(
                    "https://images.unsplash.com/{}?auto=format&fit=crop&w=400",
                    seed.photo
                ),
                created_at: at,
                updated_at: at,
            }
        })
        .collect()
}

/// Wait `delay`, then replace the store's collection with the mock menu.
pub async fn load_seed(store: &DishStore, delay: Duration) -> Result<usize, DomainError> {
    tracing::debug!(delay_ms = delay.as_millis() as u64, "Fetching menu");
    tokio::time::sleep(delay).await;

    let dishes = mock_dishes();
    let count = dishes.len();
    store.load(dishes).await?;
    Ok(count)
}
