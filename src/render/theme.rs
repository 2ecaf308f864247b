//! Page themes.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Presentation theme. Only the stylesheet differs between themes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark slate palette with the Inter web font.
    #[default]
    Dark,
    /// Light palette using system fonts.
    Light,
}

impl Theme {
    /// Extra `<head>` markup loaded before the stylesheet.
    pub fn head_links(&self) -> &'static str {
        match self {
            Theme::Dark => DARK_HEAD_LINKS,
            Theme::Light => "",
        }
    }

    /// Stylesheet body for the `<style>` element.
    pub fn stylesheet(&self) -> &'static str {
        match self {
            Theme::Dark => DARK_CSS,
            Theme::Light => LIGHT_CSS,
        }
    }
}

const DARK_HEAD_LINKS: &str = r#"    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600&display=swap" rel="stylesheet">
"#;

const DARK_CSS: &str = r#"
        :root {
            --bg-color: #2c3e50;
            --text-color: #ecf0f1;
            --header-bg-color: #34495e;
            --table-border-color: #3f5469;
            --hover-bg-color: #3b5066;
            --critical-color: #e74c3c;
        }

        body {
            background-color: var(--bg-color);
            color: var(--text-color);
            font-family: 'Inter', sans-serif;
            margin: 0;
            padding: 0;
            line-height: 1.6;
        }
        .container {
            max-width: 95%;
            margin: 2rem auto;
            padding: 2rem;
            border-radius: 10px;
            background-color: var(--bg-color);
            box-shadow: 0 8px 20px rgba(0, 0, 0, 0.4);
            overflow-x: auto;
        }
        h1 {
            color: var(--text-color);
            text-align: center;
            font-size: 2.5rem;
            font-weight: 600;
            letter-spacing: 1px;
            margin-bottom: 2rem;
            text-transform: uppercase;
        }
        .sleek-table {
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
            border-radius: 8px;
            overflow: hidden;
        }
        .sleek-table thead {
            background-color: var(--header-bg-color);
            color: #fff;
            position: sticky;
            top: 0;
        }
        .sleek-table th, .sleek-table td {
            padding: 1.25rem 1.5rem;
            text-align: left;
            border-bottom: 1px solid var(--table-border-color);
        }
        .sleek-table th {
            font-weight: 600;
            text-transform: uppercase;
            font-size: 0.85rem;
        }
        .sleek-table tbody tr {
            background-color: var(--bg-color);
            transition: background-color 0.3s ease;
        }
        .sleek-table tbody tr:hover {
            background-color: var(--hover-bg-color);
        }
        .sleek-table tbody tr:last-of-type td {
            border-bottom: none;
        }
        .critical-violation {
            color: var(--critical-color) !important;
            font-weight: 600;
        }
        .no-data {
            text-align: center;
            font-size: 1.1rem;
            color: #95a5a6;
        }
"#;

const LIGHT_CSS: &str = r#"
        body {
            background-color: #f4f6f8;
            color: #222;
            font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
            margin: 0;
            padding: 0;
        }
        .container {
            max-width: 95%;
            margin: 2rem auto;
            padding: 1.5rem;
            background-color: #fff;
            border: 1px solid #dde1e5;
            overflow-x: auto;
        }
        h1 {
            text-align: center;
            font-size: 2rem;
            margin-bottom: 1.5rem;
        }
        .sleek-table {
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
        }
        .sleek-table th, .sleek-table td {
            padding: 0.6rem 0.9rem;
            text-align: left;
            border: 1px solid #dde1e5;
        }
        .sleek-table thead {
            background-color: #e9ecef;
        }
        .sleek-table tbody tr:nth-child(even) {
            background-color: #f8f9fa;
        }
        .critical-violation {
            color: #c0392b;
            font-weight: 600;
        }
        .no-data {
            text-align: center;
            color: #6c757d;
        }
"#;
