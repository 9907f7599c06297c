use serde_json::{json, Value};

/// Canned response body for the incident listing, shaped like a real API envelope.
pub fn sample_incident_payload() -> Value {
    json!({
        "success": true,
        "data": [
            { "id": 1, "product": "Product A", "status": "Open", "action": "Action 1" },
            { "id": 2, "product": "Product B", "status": "Closed", "action": "Action 2" },
            { "id": 3, "product": "Product C", "status": "Pending", "action": "Action 3" }
        ],
        "trace_id": "mock-incidents"
    })
}
