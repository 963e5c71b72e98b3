//! Integration tests for the rental store
//!
//! Runs against the PostgreSQL server named by `DATABASE_URL` and is skipped
//! when it is unset. Tables are created as temporary tables on a
//! single-connection pool, so nothing outlives the test.

use chrono::{Duration, Utc};
use lightbnb::prelude::*;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;

const SCHEMA: &[&str] = &[
    "CREATE TEMP TABLE users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        password VARCHAR(255) NOT NULL
    )",
    "CREATE TEMP TABLE properties (
        id SERIAL PRIMARY KEY,
        owner_id INTEGER NOT NULL,
        title VARCHAR(255) NOT NULL,
        description TEXT,
        thumbnail_photo_url VARCHAR(255) NOT NULL,
        cover_photo_url VARCHAR(255) NOT NULL,
        cost_per_night INTEGER NOT NULL DEFAULT 0,
        parking_spaces INTEGER NOT NULL DEFAULT 0,
        number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
        number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
        country VARCHAR(255) NOT NULL,
        street VARCHAR(255) NOT NULL,
        city VARCHAR(255) NOT NULL,
        province VARCHAR(255) NOT NULL,
        post_code VARCHAR(255) NOT NULL,
        active BOOLEAN NOT NULL DEFAULT TRUE
    )",
    "CREATE TEMP TABLE reservations (
        id SERIAL PRIMARY KEY,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        property_id INTEGER NOT NULL,
        guest_id INTEGER NOT NULL
    )",
    "CREATE TEMP TABLE property_reviews (
        id SERIAL PRIMARY KEY,
        guest_id INTEGER NOT NULL,
        property_id INTEGER NOT NULL,
        reservation_id INTEGER NOT NULL,
        rating SMALLINT NOT NULL DEFAULT 0,
        message TEXT
    )",
];

async fn setup_store() -> Option<PgRentalStore> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return None;
    };

    // One connection so every statement sees the same temp tables
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Failed to create table");
    }

    Some(PgRentalStore::new(pool))
}

fn new_property(owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: Some("description".to_string()),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night,
        street: "536 Namsub Highway".to_string(),
        city: city.to_string(),
        province: "Quebec".to_string(),
        post_code: "28142".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 6,
        number_of_bathrooms: 4,
        number_of_bedrooms: 8,
    }
}

async fn add_review(store: &PgRentalStore, property_id: i32, rating: i16) {
    sqlx::query(
        "INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating) VALUES (1, $1, 1, $2)",
    )
    .bind(property_id)
    .bind(rating)
    .execute(store.pool())
    .await
    .expect("Failed to insert review");
}

#[tokio::test]
async fn test_user_round_trip() {
    let Some(store) = setup_store().await else {
        return;
    };

    let created = store
        .add_user(NewUser {
            name: "Devin Sanders".to_string(),
            email: "tristanjacobs@gmail.com".to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
        })
        .await
        .unwrap();

    let by_email = store
        .get_user_with_email("tristanjacobs@gmail.com")
        .await
        .unwrap();
    assert_eq!(by_email.as_ref(), Some(&created));

    let by_id = store.get_user_with_id(created.id).await.unwrap();
    assert_eq!(by_id, Some(created));

    assert_eq!(store.get_user_with_email("nobody@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_property_search_filters() {
    let Some(store) = setup_store().await else {
        return;
    };

    let cheap = store
        .add_property(new_property(1, "Speed lamp", "Vancouver", 5000))
        .await
        .unwrap();
    let mid = store
        .add_property(new_property(2, "Blank corner", "North Vancouver", 12000))
        .await
        .unwrap();
    let pricey = store
        .add_property(new_property(1, "Habit mix", "Calgary", 30000))
        .await
        .unwrap();

    add_review(&store, cheap.id, 3).await;
    add_review(&store, mid.id, 5).await;
    add_review(&store, mid.id, 4).await;
    add_review(&store, pricey.id, 5).await;

    let all = store
        .get_all_properties(FilterOptions::new(), DEFAULT_LIMIT)
        .await
        .unwrap();
    let titles: Vec<&str> = all.iter().map(|l| l.property.title.as_str()).collect();
    assert_eq!(titles, vec!["Speed lamp", "Blank corner", "Habit mix"]);

    let in_vancouver = store
        .get_all_properties(FilterOptions::new().city("Vancouver"), 10)
        .await
        .unwrap();
    assert_eq!(in_vancouver.len(), 2);

    let options = FilterOptions::from_json(&json!({
        "minimum_price_per_night": 100,
        "maximum_price_per_night": 200,
    }))
    .unwrap();
    let in_range = store.get_all_properties(options, 10).await.unwrap();
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].property.id, mid.id);
    assert_eq!(in_range[0].average_rating, Some(4.5));

    let well_rated = store
        .get_all_properties(FilterOptions::new().minimum_rating(4.5), 10)
        .await
        .unwrap();
    let ids: Vec<i32> = well_rated.iter().map(|l| l.property.id).collect();
    assert_eq!(ids, vec![mid.id, pricey.id]);

    let by_owner = store
        .get_all_properties(FilterOptions::new().owner_id(1), 1)
        .await
        .unwrap();
    assert_eq!(by_owner.len(), 1);
    assert_eq!(by_owner[0].property.id, cheap.id);
}

#[tokio::test]
async fn test_past_reservations() {
    let Some(store) = setup_store().await else {
        return;
    };

    let property = store
        .add_property(new_property(1, "Port out", "Toronto", 9000))
        .await
        .unwrap();
    add_review(&store, property.id, 4).await;

    let today = Utc::now().date_naive();
    let stays = [
        (today - Duration::days(30), today - Duration::days(25)),
        (today - Duration::days(60), today - Duration::days(55)),
        (today + Duration::days(5), today + Duration::days(10)),
    ];
    for (start, end) in stays {
        sqlx::query(
            "INSERT INTO reservations (start_date, end_date, property_id, guest_id) VALUES ($1, $2, $3, 7)",
        )
        .bind(start)
        .bind(end)
        .bind(property.id)
        .execute(store.pool())
        .await
        .unwrap();
    }

    let reservations = store.get_all_reservations(7, 10).await.unwrap();
    assert_eq!(reservations.len(), 2);
    assert!(reservations[0].start_date < reservations[1].start_date);
    assert_eq!(reservations[0].title, "Port out");
    assert_eq!(reservations[0].average_rating, Some(4.0));

    assert!(store.get_all_reservations(8, 10).await.unwrap().is_empty());
}
