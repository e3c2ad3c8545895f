//! Static information about the cabin and the trip.

use actix_web::HttpResponse;
use serde_json::{json, Value};

/// The trip information document shown on the app's cabin page
pub fn cabin_document() -> Value {
    json!({
        "name": "Gabnalm",
        "address": "Near Kufstein, Tyrol, Austria",
        "date": "04.06-08.06.2025",
        "description": "Like the last two years we are heading back to the Gabnalm in Tyrol! The cabin sits near Kufstein, about 1.5 hours from Grafing or Innsbruck, completely secluded.",
        "images": [
            "/images/gabnalm-aussen.jpg",
            "/images/gabnalm-innen.jpg",
            "/images/gabnalm-aussicht.jpg"
        ],
        "googleMapsUrl": "https://maps.google.com/?q=Gabnalm+Kufstein+Tirol",
        "features": [
            "27 beds in total",
            "15 beds in rooms on the first floor",
            "12 places in the dormitory on the second floor",
            "Bed linen provided",
            "Fully equipped shared kitchen",
            "Completely secluded location",
            "Close to the Walchensee and hiking trails",
            "Parking available (fuel money for large cars)",
            "Full board including alcohol"
        ],
        "pricing": {
            "earlyBird": { "deadline": "01.05.2025", "price": 285 },
            "regular": { "deadline": "18.05.2025", "price": 310 },
            "late": { "deadline": "01.06.2025", "price": 325 },
            "singleNight": { "price": 75, "note": "only in exceptional cases" }
        },
        "included": [
            "All 4 nights",
            "All meals including alcohol",
            "Admission at the lake",
            "Other costs during the stay",
            "Fuel money for drivers with large cars"
        ],
        "program": [
            "Beerpong tournament on Friday and Saturday",
            "Trips to the Walchensee",
            "Hikes and walks to nearby summits",
            "A more demanding hike across the Zahmer Kaiser",
            "MTB tours (for full-suspension owners)",
            "Mountain kart in Sankt Johann (optional)"
        ],
        "meetingPoint": "Volksfestplatz Grafing on 04.06 at 13:00",
        "rules": [
            "Please bring your own towels",
            "Keep receipts for shared expenses",
            "No smoking inside the cabin",
            "All participants must enter their details at least 3 days before departure"
        ],
        "aftermovie": "https://www.youtube.com/watch?v=sQE0VKUn7to"
    })
}

/// GET /api/cabin-info
pub async fn cabin_info() -> HttpResponse {
    HttpResponse::Ok().json(cabin_document())
}
