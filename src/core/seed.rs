//! Built-in listings used when nothing usable has been saved yet.

use crate::domain::model::{CatalogSnapshot, Product, WorkerProfile};
use crate::domain::taxonomy::WorkerCategory;

pub fn seed_workers() -> Vec<WorkerProfile> {
    vec![
        WorkerProfile {
            id: "1".to_string(),
            name: "Ramesh Kumar".to_string(),
            category: WorkerCategory::Plumber,
            services: vec![
                "Leak repair".to_string(),
                "Pipe fitting".to_string(),
                "Tap installation".to_string(),
            ],
            description: "Fifteen years fixing leaks, blocked drains and bathroom fittings."
                .to_string(),
            hourly_rate: 300.0,
            rating: 4.8,
            review_count: 124,
            location: "Banjara Hills, Hyderabad".to_string(),
            phone: "+91 98480 12345".to_string(),
            image_url: "https://images.unsplash.com/photo-1581578731548-c64695cc6952?auto=format&fit=crop&w=400&q=80".to_string(),
            verified: true,
        },
        WorkerProfile {
            id: "2".to_string(),
            name: "Suresh Reddy".to_string(),
            category: WorkerCategory::Electrician,
            services: vec![
                "House wiring".to_string(),
                "Fan installation".to_string(),
                "Inverter setup".to_string(),
            ],
            description: "Licensed electrician for homes and small shops, same-day visits."
                .to_string(),
            hourly_rate: 350.0,
            rating: 4.6,
            review_count: 89,
            location: "Kukatpally, Hyderabad".to_string(),
            phone: "+91 98490 67890".to_string(),
            image_url: "https://images.unsplash.com/photo-1621905251918-48416bd8575a?auto=format&fit=crop&w=400&q=80".to_string(),
            verified: true,
        },
        WorkerProfile {
            id: "3".to_string(),
            name: "Mahesh Yadav".to_string(),
            category: WorkerCategory::Plumber,
            services: vec![
                "Drain cleaning".to_string(),
                "Water tank repair".to_string(),
            ],
            description: "Quick and affordable help with drains, tanks and motors.".to_string(),
            hourly_rate: 250.0,
            rating: 4.3,
            review_count: 41,
            location: "Secunderabad".to_string(),
            phone: "+91 99120 24680".to_string(),
            image_url: "https://images.unsplash.com/photo-1607472586893-edb57bdc0e39?auto=format&fit=crop&w=400&q=80".to_string(),
            verified: false,
        },
    ]
}

pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Professional Tool Kit".to_string(),
            category: "Tools".to_string(),
            price: 2499.0,
            rating: 4.7,
            image: "https://images.unsplash.com/photo-1581147036324-c17ac41dfa6c?auto=format&fit=crop&w=400&q=80".to_string(),
        },
        Product {
            id: "p2".to_string(),
            name: "Safety Helmet".to_string(),
            category: "Safety Gear".to_string(),
            price: 599.0,
            rating: 4.5,
            image: "https://images.unsplash.com/photo-1578874691223-64558a3ca096?auto=format&fit=crop&w=400&q=80".to_string(),
        },
        Product {
            id: "p3".to_string(),
            name: "Insulated Gloves".to_string(),
            category: "Safety Gear".to_string(),
            price: 349.0,
            rating: 4.4,
            image: "https://images.unsplash.com/photo-1618090584176-7132b9911657?auto=format&fit=crop&w=400&q=80".to_string(),
        },
    ]
}

pub fn seed_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        workers: seed_workers(),
        products: seed_products(),
    }
}
