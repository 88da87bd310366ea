//! Bundled demo dataset: major shipping lanes, a few flight corridors,
//! and a wind observation table.

use tradewinds_core::dataset::{
    CompassDirection, Dataset, EntityCategory, MovingEntity, Route, RouteStyle, WindSample,
};
use tradewinds_core::types::LatLng;

fn style(color: &str) -> RouteStyle {
    RouteStyle {
        color: color.to_string(),
        ..RouteStyle::default()
    }
}

fn routes() -> Vec<Route> {
    let mut routes = Vec::new();

    routes.push(
        Route::new(
            "suez-route",
            "Suez Canal Route",
            vec![
                LatLng::new(51.5, -0.1),  // London
                LatLng::new(43.3, 5.4),   // Marseille
                LatLng::new(37.0, 25.0),  // Eastern Mediterranean
                LatLng::new(31.3, 32.3),  // Port Said
                LatLng::new(29.9, 32.5),  // Suez Canal
                LatLng::new(27.9, 33.8),  // Red Sea
                LatLng::new(12.8, 43.3),  // Bab-el-Mandeb Strait
                LatLng::new(8.0, 50.0),   // Arabian Sea
                LatLng::new(1.3, 103.8),  // Singapore
            ],
            style("#22d3ee"),
        )
        .expect("suez route is valid"),
    );

    routes.push(
        Route::new(
            "trans-pacific",
            "Trans-Pacific Route",
            vec![
                LatLng::new(34.0, -118.2),  // Los Angeles
                LatLng::new(30.0, -130.0),
                LatLng::new(25.0, -150.0),
                LatLng::new(21.3, -157.8),  // Honolulu
                LatLng::new(15.0, 170.0),
                LatLng::new(35.7, 139.8),   // Tokyo
                LatLng::new(31.2, 121.5),   // Shanghai
            ],
            style("#0ea5e9"),
        )
        .expect("trans-pacific route is valid"),
    );

    routes.push(
        Route::new(
            "indian-ocean",
            "Indian Ocean Route",
            vec![
                LatLng::new(1.3, 103.8), // Singapore
                LatLng::new(6.9, 79.9),  // Colombo
                LatLng::new(19.0, 72.8), // Mumbai
                LatLng::new(25.3, 51.5), // Doha
            ],
            style("#0284c7"),
        )
        .expect("indian-ocean route is valid"),
    );

    // Flight corridors: two endpoints each, arc-expanded at render time.
    routes.push(
        Route::new(
            "lhr-jfk",
            "London – New York",
            vec![LatLng::new(51.47, -0.45), LatLng::new(40.64, -73.78)],
            style("#f97316"),
        )
        .expect("lhr-jfk route is valid"),
    );
    routes.push(
        Route::new(
            "nrt-lax",
            "Tokyo – Los Angeles",
            vec![LatLng::new(35.77, 140.39), LatLng::new(33.94, -118.41)],
            style("#fb923c"),
        )
        .expect("nrt-lax route is valid"),
    );

    routes
}

fn entities() -> Vec<MovingEntity> {
    vec![
        MovingEntity {
            id: "ship-001".to_string(),
            route_id: "suez-route".to_string(),
            category: EntityCategory::Vessel,
            label: "MSC Gülsün".to_string(),
            speed: 22.0,
            progress: 0.35,
            origin: "Rotterdam".to_string(),
            destination: "Singapore".to_string(),
            detail: "Containers (23,756 TEU)".to_string(),
        },
        MovingEntity {
            id: "ship-002".to_string(),
            route_id: "suez-route".to_string(),
            category: EntityCategory::Vessel,
            label: "CSCL Globe".to_string(),
            speed: 20.0,
            progress: 0.65,
            origin: "Hamburg".to_string(),
            destination: "Shanghai".to_string(),
            detail: "Containers (19,100 TEU)".to_string(),
        },
        MovingEntity {
            id: "ship-003".to_string(),
            route_id: "trans-pacific".to_string(),
            category: EntityCategory::Vessel,
            label: "Ever Ace".to_string(),
            speed: 21.0,
            progress: 0.15,
            origin: "Los Angeles".to_string(),
            destination: "Shanghai".to_string(),
            detail: "Containers (23,992 TEU)".to_string(),
        },
        MovingEntity {
            id: "ship-004".to_string(),
            route_id: "indian-ocean".to_string(),
            category: EntityCategory::Vessel,
            label: "Al Dahna".to_string(),
            speed: 19.0,
            progress: 0.5,
            origin: "Singapore".to_string(),
            destination: "Doha".to_string(),
            detail: "LNG carrier".to_string(),
        },
        MovingEntity {
            id: "flight-001".to_string(),
            route_id: "lhr-jfk".to_string(),
            category: EntityCategory::Aircraft,
            label: "TW117".to_string(),
            speed: 550.0,
            progress: 0.4,
            origin: "London Heathrow".to_string(),
            destination: "New York JFK".to_string(),
            detail: "B777-300ER, FL380".to_string(),
        },
        MovingEntity {
            id: "flight-002".to_string(),
            route_id: "nrt-lax".to_string(),
            category: EntityCategory::Aircraft,
            label: "TW808".to_string(),
            speed: 575.0,
            progress: 0.7,
            origin: "Tokyo Narita".to_string(),
            destination: "Los Angeles".to_string(),
            detail: "B787-9, FL400".to_string(),
        },
    ]
}

fn wind() -> Vec<WindSample> {
    vec![
        WindSample {
            region: "North Atlantic".to_string(),
            speed: 85.0,
            direction: CompassDirection::NW,
        },
        WindSample {
            region: "Bay of Biscay".to_string(),
            speed: 45.0,
            direction: CompassDirection::W,
        },
        WindSample {
            region: "Baltic Sea".to_string(),
            speed: 30.0,
            direction: CompassDirection::NE,
        },
        WindSample {
            region: "Gulf of Aden".to_string(),
            speed: 60.0,
            direction: CompassDirection::SW,
        },
        WindSample {
            region: "North Pacific".to_string(),
            speed: 95.0,
            direction: CompassDirection::W,
        },
        WindSample {
            region: "South China Sea".to_string(),
            speed: 40.0,
            direction: CompassDirection::E,
        },
        WindSample {
            region: "Arabian Sea".to_string(),
            speed: 55.0,
            direction: CompassDirection::S,
        },
        WindSample {
            region: "Bering Sea".to_string(),
            speed: 70.0,
            direction: CompassDirection::N,
        },
    ]
}

/// The full demo dataset.
pub fn demo_dataset() -> Dataset {
    Dataset::new(routes(), entities(), wind())
}
