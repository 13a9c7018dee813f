//! Fixed rows loaded when the schema is first provisioned.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{Category, Competitor};

/// 2024-01-01 10:00:00, the created/modified date of every seeded row.
pub const SEED_TIMESTAMP: NaiveDateTime = NaiveDateTime::new(
    match NaiveDate::from_ymd_opt(2024, 1, 1) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    },
    match NaiveTime::from_hms_opt(10, 0, 0) {
        Some(time) => time,
        None => panic!("invalid seed time"),
    },
);

const CATEGORIES: &[(i32, &str)] = &[(1, "Ünlüler"), (2, "Gönüllüler")];

const COMPETITORS: &[(i32, &str, &str, i32)] = &[
    (1, "Acun", "Ilıcalı", 1),
    (2, "Aleyna", "Avcı", 1),
    (3, "Hadise", "Açıkgöz", 1),
    (4, "Sertan", "Bozkuş", 1),
    (5, "Özge", "Açık", 1),
    (6, "Kıvanç", "Tatlıtuğ", 1),
    (7, "Ahmet", "Yılmaz", 2),
    (8, "Elif", "Demirtaş", 2),
    (9, "Cem", "Öztürk", 2),
    (10, "Ayşe", "Karaca", 2),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, name)| Category {
            id,
            name: name.to_string(),
            created_date: SEED_TIMESTAMP,
            modified_date: SEED_TIMESTAMP,
            is_deleted: false,
        })
        .collect()
}

pub fn competitors() -> Vec<Competitor> {
    COMPETITORS
        .iter()
        .map(|&(id, first_name, last_name, category_id)| Competitor {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            category_id,
            created_date: SEED_TIMESTAMP,
            modified_date: SEED_TIMESTAMP,
            is_deleted: false,
        })
        .collect()
}
