//! Built-in example documents, used whenever no readable snapshot exists.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::Document;

const JAVASCRIPT_ADVANCED: &str = include_str!("../../seed/javascript-advanced.md");
const REACT_HOOKS: &str = include_str!("../../seed/react-hooks.md");
const CSS_GRID: &str = include_str!("../../seed/css-grid.md");

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_doc(
    id: &str,
    title: &str,
    category: &str,
    tags: &[&str],
    content: &str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        content: content.trim().to_string(),
        images: Vec::new(),
        created_at,
        updated_at,
    }
}

/// The seed collection, newest first.
pub fn seed_documents() -> Vec<Document> {
    vec![
        seed_doc(
            "1",
            "JavaScript 高级技巧",
            "技术笔记",
            &["JavaScript", "前端", "高级"],
            JAVASCRIPT_ADVANCED,
            day(2024, 1, 15),
            day(2024, 1, 15),
        ),
        seed_doc(
            "2",
            "React Hooks 学习笔记",
            "学习心得",
            &["React", "Hooks", "前端框架"],
            REACT_HOOKS,
            day(2024, 1, 10),
            day(2024, 1, 12),
        ),
        seed_doc(
            "3",
            "CSS Grid 布局完全指南",
            "技术笔记",
            &["CSS", "布局", "响应式"],
            CSS_GRID,
            day(2024, 1, 8),
            day(2024, 1, 8),
        ),
    ]
}
