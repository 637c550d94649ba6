//! Unit tests for transit-json.
//!
//! Whole documents go through [`process`](crate::process) on in-memory
//! buffers; responses are compared as parsed `serde_json::Value`s.

#[cfg(test)]
mod helpers {
    use serde_json::Value;

    pub fn run(input: &str) -> Value {
        let mut out = Vec::new();
        crate::process(input.as_bytes(), &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use transit_catalogue::CatalogueError;

    use crate::model::Document;
    use crate::{JsonError, build_catalogue};

    #[test]
    fn lines_may_precede_their_stops() {
        let doc: Document = serde_json::from_str(
            r#"{"base_requests": [
                {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false},
                {"type": "Stop", "name": "A", "latitude": 0, "longitude": 0,
                 "road_distances": {"B": 700}},
                {"type": "Stop", "name": "B", "latitude": 0, "longitude": 0.01}
            ]}"#,
        )
        .unwrap();
        let c = build_catalogue(&doc.base_requests).unwrap();
        assert_eq!(c.stop_count(), 2);
        assert_eq!(c.line_count(), 1);
        let a = c.stop_id("A").unwrap();
        let b = c.stop_id("B").unwrap();
        assert_eq!(c.distance(a, b), Some(700));
        assert_eq!(c.distance(b, a), Some(700));
        assert!(doc.routing_settings.is_none());
    }

    #[test]
    fn distance_to_unknown_stop_fails() {
        let doc: Document = serde_json::from_str(
            r#"{"base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0, "longitude": 0,
                 "road_distances": {"Ghost": 10}}
            ]}"#,
        )
        .unwrap();
        let err = build_catalogue(&doc.base_requests).unwrap_err();
        assert!(matches!(err, JsonError::Catalogue(CatalogueError::UnknownStop(n)) if n == "Ghost"));
    }

    #[test]
    fn unknown_base_request_type_fails_to_parse() {
        let res: Result<Document, _> =
            serde_json::from_str(r#"{"base_requests": [{"type": "Tram", "name": "T"}]}"#);
        assert!(res.is_err());
    }
}

// ── Stat requests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod stat_requests {
    use approx::assert_relative_eq;
    use serde_json::json;

    use crate::JsonError;

    use super::helpers::run;

    const NETWORK: &str = r#"
        "base_requests": [
            {"type": "Stop", "name": "X", "latitude": 0, "longitude": 0,
             "road_distances": {"Y": 1000}},
            {"type": "Stop", "name": "Y", "latitude": 0, "longitude": 1},
            {"type": "Stop", "name": "Lonely", "latitude": 5, "longitude": 5},
            {"type": "Bus", "name": "L", "stops": ["X", "Y"], "is_roundtrip": false}
        ],
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 60}
    "#;

    fn doc(stat_requests: &str) -> String {
        format!("{{ {NETWORK}, \"stat_requests\": {stat_requests} }}")
    }

    #[test]
    fn route_wait_then_ride() {
        let out = run(&doc(r#"[{"id": 1, "type": "Route", "from": "X", "to": "Y"}]"#));
        assert_eq!(
            out,
            json!([{
                "request_id": 1,
                "total_time": 7.0,
                "items": [
                    {"type": "Wait", "stop_name": "X", "time": 6.0},
                    {"type": "Bus", "bus": "L", "span_count": 1, "time": 1.0}
                ]
            }])
        );
    }

    #[test]
    fn route_without_path_is_not_found() {
        let out = run(&doc(r#"[
            {"id": 2, "type": "Route", "from": "X", "to": "Lonely"},
            {"id": 3, "type": "Route", "from": "X", "to": "Atlantis"}
        ]"#));
        assert_eq!(
            out,
            json!([
                {"request_id": 2, "error_message": "not found"},
                {"request_id": 3, "error_message": "not found"}
            ])
        );
    }

    #[test]
    fn stop_lines() {
        let out = run(&doc(r#"[
            {"id": 4, "type": "Stop", "name": "Y"},
            {"id": 5, "type": "Stop", "name": "Lonely"},
            {"id": 6, "type": "Stop", "name": "Atlantis"}
        ]"#));
        assert_eq!(
            out,
            json!([
                {"request_id": 4, "buses": ["L"]},
                {"request_id": 5, "buses": []},
                {"request_id": 6, "error_message": "not found"}
            ])
        );
    }

    #[test]
    fn bus_stats() {
        let out = run(&doc(r#"[
            {"id": 7, "type": "Bus", "name": "L"},
            {"id": 8, "type": "Bus", "name": "404"}
        ]"#));
        let bus = &out[0];
        assert_eq!(bus["request_id"], 7);
        assert_eq!(bus["stop_count"], 3);
        assert_eq!(bus["unique_stop_count"], 2);
        assert_relative_eq!(bus["route_length"].as_f64().unwrap(), 2_000.0);
        // One degree of longitude on the equator ≈ 111.2 km, there and back.
        let curvature = bus["curvature"].as_f64().unwrap();
        assert_relative_eq!(curvature, 2_000.0 / (2.0 * 111_194.9), max_relative = 1e-4);
        assert_eq!(out[1], json!({"request_id": 8, "error_message": "not found"}));
    }

    #[test]
    fn responses_keep_request_order() {
        let out = run(&doc(r#"[
            {"id": 30, "type": "Stop", "name": "X"},
            {"id": 10, "type": "Bus", "name": "L"},
            {"id": 20, "type": "Route", "from": "Y", "to": "X"}
        ]"#));
        let ids: Vec<i64> = out
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["request_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn route_without_settings_is_an_error() {
        let input = r#"{
            "base_requests": [{"type": "Stop", "name": "X", "latitude": 0, "longitude": 0}],
            "stat_requests": [{"id": 1, "type": "Route", "from": "X", "to": "X"}]
        }"#;
        let err = crate::process(input.as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, JsonError::MissingRoutingSettings { request_id: 1 }));
    }

    #[test]
    fn map_request_does_not_sink_the_batch() {
        let out = run(&doc(r#"[
            {"id": 1, "type": "Stop", "name": "X"},
            {"id": 2, "type": "Map"}
        ]"#));
        assert_eq!(
            out,
            json!([
                {"request_id": 1, "buses": ["L"]},
                {"request_id": 2, "error_message": "not found"}
            ])
        );
    }

    #[test]
    fn unknown_request_type_is_skipped() {
        let out = run(&doc(r#"[
            {"id": 1, "type": "Heatmap", "zoom": 3},
            {"id": 2, "type": "Bus", "name": "404"}
        ]"#));
        assert_eq!(out, json!([{"request_id": 2, "error_message": "not found"}]));
    }

    #[test]
    fn single_stop_line_reports_straight_curvature() {
        let input = r#"{
            "base_requests": [
                {"type": "Stop", "name": "S", "latitude": 1, "longitude": 1},
                {"type": "Bus", "name": "solo", "stops": ["S"], "is_roundtrip": false}
            ],
            "stat_requests": [{"id": 1, "type": "Bus", "name": "solo"}]
        }"#;
        assert_eq!(
            run(input),
            json!([{
                "request_id": 1,
                "curvature": 1.0,
                "route_length": 0.0,
                "stop_count": 1,
                "unique_stop_count": 1
            }])
        );
    }

    #[test]
    fn render_settings_are_ignored() {
        let input = format!(
            "{{ {NETWORK}, \"render_settings\": {{\"width\": 600}}, \"stat_requests\": [] }}"
        );
        assert_eq!(run(&input), json!([]));
    }
}
