use std::fmt::Write as _;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
nav a{margin-right:1rem;}\
table{border-collapse:collapse;margin-top:1rem;}\
th,td{border:1px solid #ccc;padding:.4rem .8rem;text-align:left;}\
th{background:#f0f0f0;}";

const NAV_LINKS: [(&str, &str); 5] = [
    ("/dashboard", "Dashboard"),
    ("/top-players-by-wickets", "Top Wicket Takers"),
    ("/top-players-by-runs", "Top Run Scorers"),
    ("/top-players-by-value", "Most Valuable Players"),
    ("/teams", "Team Standings"),
];

/// Wrap page content into the shared document shell
pub fn page(title: &str, body: &str) -> String {
    let title = escape(title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n");
    html.push_str(&nav());
    let _ = writeln!(html, "<h1>{title}</h1>");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

fn nav() -> String {
    let mut html = String::from("<nav>\n");
    for (href, label) in NAV_LINKS {
        let _ = writeln!(html, "<a href=\"{href}\">{label}</a>");
    }
    html.push_str("</nav>\n");
    html
}

/// Escape text for use inside HTML elements and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
