/// Hoja de estilos servida en `/style.css`
pub const STYLE_CSS: &str = r#"
:root {
    --bg: #f4f6f8;
    --card: #ffffff;
    --text: #1f2933;
    --muted: #6b7785;
    --accent: #1d4ed8;
    --ok: #15803d;
    --warn-bg: #fff7e6;
    --warn: #b45309;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
}
.container { max-width: 1000px; margin: 0 auto; padding: 0 16px; }
header { background: var(--accent); color: #fff; padding: 24px 0; }
header h1 { margin: 0 0 4px; }
.stats { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 12px; font-weight: 600; }
.info-box { background: var(--card); border-left: 4px solid var(--accent); padding: 12px 16px; margin: 24px 0; border-radius: 4px; }
.empty-state { background: var(--card); text-align: center; padding: 40px; border-radius: 6px; }
.muted { color: var(--muted); }
.date-section h2 { margin: 32px 0 12px; font-size: 1.2em; }
.table-wrapper { overflow-x: auto; background: var(--card); border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 10px 12px; text-align: left; border-bottom: 1px solid #e5e7eb; }
th { background: #f9fafb; font-size: 0.85em; text-transform: uppercase; color: var(--muted); }
tr.warning { background: var(--warn-bg); }
.time-badge { font-family: monospace; background: #e0e7ff; padding: 2px 8px; border-radius: 4px; }
.filename { font-family: monospace; }
.status-badge { padding: 2px 8px; border-radius: 4px; font-size: 0.9em; }
.status-badge.ok { color: var(--ok); }
.status-badge.warning { color: var(--warn); font-weight: 600; }
.download-btn { display: inline-flex; align-items: center; gap: 6px; color: var(--accent); text-decoration: none; font-weight: 600; }
footer { padding: 32px 0; text-align: center; font-size: 0.9em; }
@media (max-width: 640px) {
    thead { display: none; }
    tr { display: block; border-bottom: 1px solid #e5e7eb; }
    td { display: flex; justify-content: space-between; border: none; }
    td::before { content: attr(data-label); font-weight: 600; color: var(--muted); }
}
"#;
