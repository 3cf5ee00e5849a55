//! End-to-end demo: build a tiny catalog, search it, print the ranking.
//!
//! ```bash
//! cargo run -p denkmal-api --example search_demo
//! ```

use denkmal_api::MonumentService;
use denkmal_search::Facet;
use denkmal_storage::Dataset;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let seed = serde_json::json!({
        "monuments": [
            {"id": 1, "name": "Brandenburger Tor", "kind_id": 1, "location_id": 1, "era_id": 1},
            {"id": 2, "name": "Siegessäule", "kind_id": 1, "location_id": 2, "era_id": 2},
            {"id": 3, "name": "Schillerdenkmal", "kind_id": 2, "location_id": 3}
        ],
        "locations": [
            {"id": 1, "street": "Pariser Platz", "district_id": 1,
             "latitude": 52.5163, "longitude": 13.3777},
            {"id": 2, "street": "Großer Stern", "district_id": 1,
             "latitude": 52.5145, "longitude": 13.3501},
            {"id": 3, "street": "Gendarmenmarkt", "district_id": 1,
             "latitude": 52.5138, "longitude": 13.3927}
        ],
        "districts": [{"id": 1, "name": "Mitte"}],
        "kinds": [
            {"id": 1, "name": "Baudenkmal"},
            {"id": 2, "name": "Standbild"}
        ],
        "eras": [
            {"id": 1, "name": "Klassizismus", "year_from": 1788, "year_to": 1791},
            {"id": 2, "name": "Gründerzeit", "year_from": 1864, "year_to": 1873}
        ],
        "participants": [
            {"id": 1, "name": "Carl Gotthard Langhans"},
            {"id": 2, "name": "Reinhold Begas"}
        ],
        "participations": [
            {"monument_id": 1, "participant_id": 1},
            {"monument_id": 3, "participant_id": 2}
        ]
    })
    .to_string();

    let service = MonumentService::new(Arc::new(Dataset::from_json(&seed)?));

    for query in ["tor", "platz begas", "denkmal"] {
        service.record_history(query);
        let results = service.search(query)?;
        println!("query: {query:?}");
        for facet in Facet::ALL {
            for hit in results.facet(facet) {
                println!("  [{facet}] {:.3}  {}", hit.score, hit.monument.name);
            }
        }
    }

    if let Some((from, to)) = service.era_year_extremes()? {
        println!("catalog spans {from} to {to}");
    }
    println!("history: {:?}", service.history());

    Ok(())
}
