//! Validación y parsing de nombres de archivo.
//!
//! Solo se aceptan nombres con el formato `YYYY-MM-DD_HHMM.<ext>`. El mismo
//! patrón protege la ruta de descarga: un nombre validado nunca contiene
//! separadores ni segmentos `..`.

use regex::Regex;

use crate::error::{OpptakError, Result};

/// Partes extraídas de un nombre de archivo válido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub date: String,
    pub hour: u8,
    pub minute: u8,
}

/// Patrón estricto de nombres de grabación para una extensión fija.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    extension: String,
    regex: Regex,
}

impl FilenamePattern {
    pub fn new(extension: &str) -> Result<Self> {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(OpptakError::Config(format!(
                "recording extension must be non-empty ASCII alphanumeric, got {:?}",
                extension
            )));
        }

        // [0-9] en vez de \d: \d en el crate regex acepta dígitos Unicode
        let regex = Regex::new(&format!(
            r"^([0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})_([0-9]{{2}})([0-9]{{2}})\.{}$",
            regex::escape(extension)
        ))?;

        Ok(Self {
            extension: extension.to_string(),
            regex,
        })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_valid(&self, filename: &str) -> bool {
        self.regex.is_match(filename)
    }

    /// Devuelve `None` para cualquier nombre que no siga el patrón.
    pub fn parse(&self, filename: &str) -> Option<ParsedName> {
        let caps = self.regex.captures(filename)?;
        let hour = caps.get(2)?.as_str().parse::<u8>().ok()?;
        let minute = caps.get(3)?.as_str().parse::<u8>().ok()?;

        Some(ParsedName {
            date: caps.get(1)?.as_str().to_string(),
            hour,
            minute,
        })
    }
}
