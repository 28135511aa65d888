// HTML rendering for the dashboard view
use crate::domain::application::Application;
use crate::domain::dashboard::DashboardView;
use crate::domain::health::{calculate_score, StatusBand};
use crate::domain::metric::{AVG_HOURLY_15_WORKDAYS, LAST_HOUR_COUNT};
use crate::domain::team::Team;
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; color: #222; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
td.num { text-align: right; }
.status-good { background: #e3f6e5; }
.status-warning { background: #fff4d6; }
.status-critical { background: #fbe1e1; }
"#;

/// Render the full page. Writes into a `String`, which cannot fail.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Application Health Dashboard</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n<h1>Application Health Dashboard</h1>\n");

    render_team_selector(&mut html, view);

    let mut any_team = false;
    for team in view.visible_teams() {
        any_team = true;
        render_team_section(&mut html, view, team);
    }
    if !any_team {
        html.push_str("<p class=\"empty\">No teams to display</p>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_team_selector(html: &mut String, view: &DashboardView) {
    html.push_str("<form method=\"get\" action=\"/\">\n<select name=\"teamId\" onchange=\"this.form.submit()\">\n");
    let _ = writeln!(
        html,
        "<option value=\"\"{}>All teams</option>",
        selected_attr(view.selected_team_id.is_none())
    );
    for team in &view.teams {
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            team.id,
            selected_attr(view.selected_team_id == Some(team.id)),
            escape_html(&team.name)
        );
    }
    html.push_str("</select>\n<noscript><button type=\"submit\">Show</button></noscript>\n</form>\n");
}

fn render_team_section(html: &mut String, view: &DashboardView, team: &Team) {
    let _ = writeln!(html, "<section class=\"team\" id=\"team-{}\">", team.id);
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&team.name));
    if !team.description.is_empty() {
        let _ = writeln!(html, "<p>{}</p>", escape_html(&team.description));
    }

    let apps = view.applications_for_team(team.id);
    if apps.is_empty() {
        html.push_str("<p class=\"empty\">No applications</p>\n</section>\n");
        return;
    }

    html.push_str("<table>\n<thead><tr><th>Application</th><th>Code</th><th>Last hour</th><th>15-day hourly avg</th><th>Score</th><th>Status</th></tr></thead>\n<tbody>\n");
    for app in apps {
        render_application_row(html, view, app);
    }
    html.push_str("</tbody>\n</table>\n</section>\n");
}

fn render_application_row(html: &mut String, view: &DashboardView, app: &Application) {
    let metrics = view.metrics_for_app(&app.code);
    let score = calculate_score(metrics);
    let band = StatusBand::from_score(score);

    let _ = writeln!(
        html,
        "<tr class=\"{}\"><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{:.1}%</td><td>{}</td></tr>",
        band.css_class(),
        escape_html(&app.name),
        escape_html(&app.code),
        format_metric(metrics.get(LAST_HOUR_COUNT).copied()),
        format_metric(metrics.get(AVG_HOURLY_15_WORKDAYS).copied()),
        score,
        band.label()
    );
}

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
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
