//! Renderizado HTML del catálogo de grabaciones.
//!
//! Página completa con resumen, una sección por fecha, estado vacío y página
//! de error para cuando el directorio no se puede leer.

pub mod depends;

pub use depends::dates::date_heading;
pub use depends::styles::STYLE_CSS;

use crate::catalog::{format_bytes, Catalog, Health, Recording};
use crate::state::PageConfig;

const DOWNLOAD_ICON: &str = concat!(
    r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path>"#,
    r#"<polyline points="7 10 12 15 17 10"></polyline>"#,
    r#"<line x1="12" y1="15" x2="12" y2="3"></line></svg>"#
);

/// Escape HTML special characters to prevent XSS
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub struct CatalogPage<'a> {
    catalog: &'a Catalog,
    page: &'a PageConfig,
}

impl<'a> CatalogPage<'a> {
    pub fn new(catalog: &'a Catalog, page: &'a PageConfig) -> Self {
        Self { catalog, page }
    }

    fn refresh_secs(&self) -> u64 {
        self.page.refresh_interval.as_secs()
    }

    fn render_header(&self) -> String {
        format!(
            concat!(
                "    <header>\n",
                "        <div class=\"container\">\n",
                "            <h1>📻 {title}</h1>\n",
                "            <p>Automatiske opptak fra {station}</p>\n",
                "            <div class=\"stats\">\n",
                "                <span>{count} opptak</span>\n",
                "                <span>{size} totalt</span>\n",
                "                <span class=\"auto-refresh\">🔄 Oppdateres automatisk</span>\n",
                "            </div>\n",
                "        </div>\n",
                "    </header>\n",
            ),
            title = escape_html(&self.page.title),
            station = escape_html(&self.page.station),
            count = self.catalog.total_count,
            size = format_bytes(self.catalog.total_size),
        )
    }

    fn render_info_box(&self) -> String {
        format!(
            concat!(
                "        <div class=\"info-box\">\n",
                "            <p>📌 Opptakene lagres i 2-timers intervaller fra <strong>06:00 til 24:00</strong>. ",
                "Filene beholdes i <strong>{hours} timer</strong> før de slettes automatisk.</p>\n",
                "        </div>\n",
            ),
            hours = self.page.retention_hours,
        )
    }

    fn render_status(health: Health) -> &'static str {
        match health {
            Health::Small => {
                r#"<span class="status-badge warning" title="Filen er mistenkelig liten">⚠️ Liten</span>"#
            }
            Health::Large => {
                r#"<span class="status-badge warning" title="Filen er mistenkelig stor">⚠️ Stor</span>"#
            }
            Health::Ok => r#"<span class="status-badge ok">✓ OK</span>"#,
        }
    }

    fn render_row(recording: &Recording) -> String {
        let row_class = if recording.health.is_ok() { "" } else { "warning" };
        let filename = escape_html(&recording.filename);

        let mut html = String::new();
        html.push_str(&format!("                <tr class=\"{}\">\n", row_class));
        html.push_str(&format!(
            "                    <td class=\"timeslot\" data-label=\"Tidspunkt\"><span class=\"time-badge\">{}</span></td>\n",
            escape_html(&recording.timeslot)
        ));
        html.push_str(&format!(
            "                    <td class=\"filename\" data-label=\"Filnavn\">{}</td>\n",
            filename
        ));
        html.push_str(&format!(
            "                    <td class=\"filesize\" data-label=\"Størrelse\">{}</td>\n",
            format_bytes(recording.size)
        ));
        html.push_str(&format!(
            "                    <td class=\"status\" data-label=\"Status\">{}</td>\n",
            Self::render_status(recording.health)
        ));
        html.push_str(&format!(
            "                    <td class=\"download\" data-label=\"\"><a href=\"{0}\" class=\"download-btn\" download title=\"Last ned {0}\">{1} Last ned</a></td>\n",
            filename, DOWNLOAD_ICON
        ));
        html.push_str("                </tr>\n");
        html
    }

    fn render_sections(&self) -> String {
        if self.catalog.is_empty() {
            return concat!(
                "        <div class=\"empty-state\">\n",
                "            <p>⚠️ Ingen opptak funnet.</p>\n",
                "            <p class=\"muted\">Sjekk at opptakssystemet kjører.</p>\n",
                "        </div>\n",
            )
            .to_string();
        }

        let mut html = String::new();
        for group in &self.catalog.groups {
            html.push_str("        <section class=\"date-section\">\n");
            html.push_str(&format!(
                "            <h2>{}</h2>\n",
                escape_html(&date_heading(&group.date))
            ));
            html.push_str("            <div class=\"table-wrapper\">\n");
            html.push_str("            <table>\n");
            html.push_str("                <thead><tr><th>Tidspunkt</th><th>Filnavn</th><th>Størrelse</th><th>Status</th><th></th></tr></thead>\n");
            html.push_str("                <tbody>\n");
            for recording in &group.recordings {
                html.push_str(&Self::render_row(recording));
            }
            html.push_str("                </tbody>\n");
            html.push_str("            </table>\n");
            html.push_str("            </div>\n");
            html.push_str("        </section>\n");
        }
        html
    }

    fn render_footer(&self) -> String {
        format!(
            concat!(
                "    <footer>\n",
                "        <div class=\"container\">\n",
                "            <p>{station} - Teknisk avdeling</p>\n",
                "            <p class=\"muted\">Siden oppdateres automatisk hvert {interval}</p>\n",
                "        </div>\n",
                "    </footer>\n",
            ),
            station = escape_html(&self.page.station),
            interval = describe_interval(self.refresh_secs()),
        )
    }

    fn render_countdown_script(&self) -> String {
        format!(
            concat!(
                "    <script>\n",
                "        let secondsLeft = {secs};\n",
                "        setInterval(() => {{\n",
                "            secondsLeft--;\n",
                "            if (secondsLeft <= 0) return;\n",
                "            const minutes = Math.floor(secondsLeft / 60);\n",
                "            const seconds = secondsLeft % 60;\n",
                "            const el = document.querySelector('.auto-refresh');\n",
                "            if (el) {{\n",
                "                el.textContent = `🔄 Oppdateres om ${{minutes}}:${{seconds.toString().padStart(2, '0')}}`;\n",
                "            }}\n",
                "        }}, 1000);\n",
                "    </script>\n",
            ),
            secs = self.refresh_secs(),
        )
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"no\">\n");
        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "    <meta http-equiv=\"refresh\" content=\"{}\">\n",
            self.refresh_secs()
        ));
        html.push_str(&format!(
            "    <title>{} - {}</title>\n",
            escape_html(&self.page.title),
            escape_html(&self.page.station)
        ));
        html.push_str("    <link rel=\"stylesheet\" href=\"style.css\">\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        html.push_str(&self.render_header());
        html.push_str("    <main class=\"container\">\n");
        html.push_str(&self.render_info_box());
        html.push_str(&self.render_sections());
        html.push_str("    </main>\n");
        html.push_str(&self.render_footer());
        html.push_str(&self.render_countdown_script());
        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}

/// Página mostrada cuando el directorio de grabaciones no se puede leer.
pub fn render_error_page(page: &PageConfig) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"no\">\n",
            "<head>\n",
            "    <meta charset=\"UTF-8\">\n",
            "    <title>Feil - {title}</title>\n",
            "    <style>\n",
            "        body {{ font-family: sans-serif; text-align: center; padding: 50px; }}\n",
            "        .error {{ background: #f8d7da; border: 1px solid #f5c6cb; color: #721c24; padding: 20px; border-radius: 5px; display: inline-block; }}\n",
            "    </style>\n",
            "</head>\n",
            "<body>\n",
            "    <div class=\"error\">\n",
            "        <h1>⚠️ Feil</h1>\n",
            "        <p>Kan ikke lese opptaksmappen. Kontakt IT-avdelingen.</p>\n",
            "    </div>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = escape_html(&page.title),
    )
}

/// "5. minutt" para 300 s, "90. sekund" si no es un número exacto de minutos.
fn describe_interval(secs: u64) -> String {
    if secs % 60 == 0 {
        format!("{}. minutt", secs / 60)
    } else {
        format!("{}. sekund", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DateGroup, MIB};
    use chrono::{DateTime, Utc};
    use std::time::Duration;

    fn page() -> PageConfig {
        PageConfig {
            title: "Idar Opptak".to_string(),
            station: "Radio Nova".to_string(),
            refresh_interval: Duration::from_secs(300),
            retention_hours: 48,
        }
    }

    fn recording(filename: &str, date: &str, hour: u8, size: u64, health: Health) -> Recording {
        Recording {
            filename: filename.to_string(),
            date: date.to_string(),
            hour,
            timeslot: crate::catalog::time_slot(hour),
            size,
            modified: DateTime::<Utc>::from(std::time::UNIX_EPOCH),
            health,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            total_count: 3,
            total_size: (120 + 50 + 2048) * MIB,
            scanned_at: Utc::now(),
            skipped: 1,
            groups: vec![
                DateGroup {
                    date: "2024-06-02".to_string(),
                    total_size: 2048 * MIB,
                    recordings: vec![recording(
                        "2024-06-02_0800.wav",
                        "2024-06-02",
                        8,
                        2048 * MIB,
                        Health::Large,
                    )],
                },
                DateGroup {
                    date: "2024-06-01".to_string(),
                    total_size: 170 * MIB,
                    recordings: vec![
                        recording("2024-06-01_0600.wav", "2024-06-01", 6, 120 * MIB, Health::Ok),
                        recording("2024-06-01_2200.wav", "2024-06-01", 22, 50 * MIB, Health::Small),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"test\""), "&quot;test&quot;");
        assert_eq!(escape_html("'test'"), "&#39;test&#39;");
    }

    #[test]
    fn renders_summary_and_refresh() {
        let catalog = sample_catalog();
        let page = page();
        let html = CatalogPage::new(&catalog, &page).to_html();

        assert!(html.contains("<meta http-equiv=\"refresh\" content=\"300\">"));
        assert!(html.contains("<span>3 opptak</span>"));
        assert!(html.contains("<span>2.2 GB totalt</span>"));
        assert!(html.contains("let secondsLeft = 300;"));
        assert!(html.contains("hvert 5. minutt"));
        assert!(html.contains("<strong>48 timer</strong>"));
    }

    #[test]
    fn renders_groups_in_catalog_order() {
        let catalog = sample_catalog();
        let page = page();
        let html = CatalogPage::new(&catalog, &page).to_html();

        let newest = html.find("02.06.2024 (Søndag)").unwrap();
        let older = html.find("01.06.2024 (Lørdag)").unwrap();
        assert!(newest < older);

        let morning = html.find("06:00-08:00").unwrap();
        let evening = html.find("22:00-00:00").unwrap();
        assert!(morning < evening);
    }

    #[test]
    fn renders_health_badges_and_links() {
        let catalog = sample_catalog();
        let page = page();
        let html = CatalogPage::new(&catalog, &page).to_html();

        assert!(html.contains("⚠️ Stor"));
        assert!(html.contains("⚠️ Liten"));
        assert!(html.contains("✓ OK"));
        assert_eq!(html.matches("<tr class=\"warning\">").count(), 2);
        assert!(html.contains("<a href=\"2024-06-01_0600.wav\" class=\"download-btn\" download"));
        assert!(html.contains("120.0 MB"));
        assert!(!html.contains("Ingen opptak funnet"));
    }

    #[test]
    fn renders_empty_state() {
        let catalog = Catalog {
            total_count: 0,
            total_size: 0,
            scanned_at: Utc::now(),
            skipped: 0,
            groups: Vec::new(),
        };
        let page = page();
        let html = CatalogPage::new(&catalog, &page).to_html();

        assert!(html.contains("Ingen opptak funnet"));
        assert!(html.contains("<span>0 opptak</span>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn escapes_configured_text() {
        let catalog = sample_catalog();
        let mut page = page();
        page.station = "<b>Nova</b>".to_string();
        let html = CatalogPage::new(&catalog, &page).to_html();
        assert!(html.contains("&lt;b&gt;Nova&lt;/b&gt;"));
        assert!(!html.contains("<b>Nova</b>"));
    }

    #[test]
    fn error_page_is_distinct() {
        let html = render_error_page(&page());
        assert!(html.contains("Kan ikke lese opptaksmappen"));
        assert!(!html.contains("Ingen opptak funnet"));
    }

    #[test]
    fn describes_interval() {
        assert_eq!(describe_interval(300), "5. minutt");
        assert_eq!(describe_interval(90), "90. sekund");
    }
}
