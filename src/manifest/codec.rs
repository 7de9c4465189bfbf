//! JAR manifest text format: `Name: value` headers, lines of at most 72
//! bytes continued by a leading space, sections separated by blank lines.

use super::{Attributes, Manifest, Section};
use crate::attributes::known::MANIFEST_VERSION;
use crate::attributes::AttributeName;
use crate::error::ManifestError;

const MAX_LINE_BYTES: usize = 72;
const SECTION_NAME: &str = "Name";

enum Target {
    Main,
    /// After a blank line, before the next section's `Name:` header.
    Between,
    Section(Section),
}

pub fn parse(text: &str) -> Result<Manifest, ManifestError> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut manifest = Manifest::new();
    let mut target = Target::Main;
    let mut header: Option<(usize, String)> = None;

    for (index, line) in normalized.split('\n').enumerate() {
        let line_no = index + 1;
        if let Some(continuation) = line.strip_prefix(' ') {
            match header.as_mut() {
                Some((_, text)) => text.push_str(continuation),
                None => return Err(ManifestError::OrphanContinuation { line: line_no }),
            }
            continue;
        }

        if let Some((at, text)) = header.take() {
            target = apply_header(&mut manifest, target, at, &text)?;
        }

        if line.is_empty() {
            if let Target::Section(section) = target {
                manifest.sections.push(section);
            }
            target = Target::Between;
        } else {
            header = Some((line_no, line.to_string()));
        }
    }

    if let Some((at, text)) = header.take() {
        target = apply_header(&mut manifest, target, at, &text)?;
    }
    if let Target::Section(section) = target {
        manifest.sections.push(section);
    }
    Ok(manifest)
}

fn apply_header(manifest: &mut Manifest, target: Target, line: usize, text: &str) -> Result<Target, ManifestError> {
    let (name, value) = text
        .split_once(": ")
        .ok_or_else(|| ManifestError::invalid_header(line, text))?;
    let name = AttributeName::new(name).map_err(|_| ManifestError::invalid_name(line, name))?;

    match target {
        Target::Main => {
            manifest.main.insert(name, value);
            Ok(Target::Main)
        }
        Target::Between => {
            if !name.matches(SECTION_NAME) {
                return Err(ManifestError::MissingSectionName { line });
            }
            Ok(Target::Section(Section {
                name: value.to_string(),
                attributes: Attributes::new(),
            }))
        }
        Target::Section(mut section) => {
            section.attributes.insert(name, value);
            Ok(Target::Section(section))
        }
    }
}

pub fn write(manifest: &Manifest) -> String {
    let mut out = String::new();

    if let Some(version) = manifest.main.get_str(MANIFEST_VERSION) {
        write_header(&mut out, MANIFEST_VERSION, version);
    }
    for (name, value) in manifest.main.iter() {
        if !name.matches(MANIFEST_VERSION) {
            write_header(&mut out, name.as_str(), value);
        }
    }
    out.push_str("\r\n");

    for section in &manifest.sections {
        write_header(&mut out, SECTION_NAME, &section.name);
        for (name, value) in section.attributes.iter() {
            write_header(&mut out, name.as_str(), value);
        }
        out.push_str("\r\n");
    }
    out
}

fn write_header(out: &mut String, name: &str, value: &str) {
    let line = format!("{name}: {value}");
    let mut rest = line.as_str();
    let mut limit = MAX_LINE_BYTES;
    loop {
        let end = floor_char_boundary(rest, limit);
        if limit < MAX_LINE_BYTES {
            out.push(' ');
        }
        out.push_str(&rest[..end]);
        out.push_str("\r\n");
        rest = &rest[end..];
        if rest.is_empty() {
            break;
        }
        // Continuation lines spend one byte on the leading space.
        limit = MAX_LINE_BYTES - 1;
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut i = max;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
