mod chrome_tests;

use crate::core::models::Branch;

pub(super) fn sample_branch() -> Branch {
    Branch::from_json(
        r#"{
      "name": "Centro",
      "courts": [
        { "id": 1, "name": "Pista 1" }, { "id": 2, "name": "Pista 2" },
        { "id": 3, "name": "Pista 3" }, { "id": 4, "name": "Pista 4" },
        { "id": 5, "name": "Pista 5" }, { "id": 6, "name": "Pista 6" }
      ],
      "schedule": {
        "monday": [ { "start": "09:00", "end": "11:00" } ],
        "saturday": [ { "start": "10:00", "end": "12:00" } ]
      },
      "bookings": [
        { "court_id": 2, "day": "monday", "start": "10:00", "end": "11:00", "label": "Lucia" },
        { "court_id": 6, "day": "monday", "start": "09:00", "end": "10:00", "label": "Clase" }
      ]
    }"#,
    )
    .unwrap()
}
