//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

/// One `/standings` entry shaped like API-NBA's.
pub fn team_json(name: &str, conference: &str, rank: u32) -> Value {
    let games_behind = match rank {
        1 => Value::Null,
        r => json!(format!("{}.0", r - 1)),
    };
    json!({
        "league": "standard",
        "season": 2022,
        "team": {
            "id": rank,
            "name": name,
            "nickname": name.split_whitespace().last().unwrap_or(name),
            "code": "XXX",
            "logo": format!("https://example.test/{}.png", rank)
        },
        "conference": { "name": conference, "rank": rank, "win": 30, "loss": 12 },
        "division": {
            "name": "atlantic",
            "rank": rank,
            "win": 10,
            "loss": 6,
            "gamesBehind": games_behind
        },
        "win": { "home": 27, "away": 21, "total": 48, "percentage": ".585", "lastTen": 6 },
        "loss": { "home": 14, "away": 20, "total": 34, "percentage": ".415", "lastTen": 4 },
        "gamesBehind": null,
        "streak": rank,
        "winStreak": rank % 2 == 1,
        "tieBreakerPoints": null
    })
}

pub fn standings_body(teams: Vec<Value>) -> Value {
    json!({
        "get": "standings",
        "parameters": { "league": "standard", "season": "2022" },
        "errors": [],
        "results": teams.len(),
        "response": teams
    })
}

/// Five East teams ranked 1-5, deliberately out of order.
pub fn shuffled_east() -> Vec<Value> {
    vec![
        team_json("New York Knicks", "east", 4),
        team_json("Milwaukee Bucks", "east", 1),
        team_json("Cleveland Cavaliers", "east", 5),
        team_json("Boston Celtics", "east", 2),
        team_json("Philadelphia 76ers", "east", 3),
    ]
}
