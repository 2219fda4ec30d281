//! Line-oriented MTL interpreter.
//!
//! Each line is trimmed and classified by its leading token. A material is
//! appended to the output as soon as its `newmtl` line is seen and every later
//! recognized directive mutates it in place, so the "current" material is
//! always the last one. Directives before the first `newmtl` are ignored.
//!
//! Malformed numbers are not errors: they are stored as NaN.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::MtlOptions;
use crate::error::Result;
use crate::ingestion::paths::{absolute_dir, resolve_texture_path};
use crate::types::Material;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Material attribute set by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    AmbientColor,
    EmissiveColor,
    DiffuseColor,
    SpecularColor,
    SpecularShininess,
    Dissolve,
    Transparency,
    AmbientMap,
    EmissiveMap,
    DiffuseMap,
    SpecularMap,
    SpecularShininessMap,
    BumpMap,
    DissolveMap,
}

/// Recognized MTL directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    NewMaterial,
    Set(Property),
}

impl Directive {
    /// Keyword table in match priority order.
    const KEYWORDS: [(&'static str, Directive); 15] = [
        ("newmtl", Directive::NewMaterial),
        ("Ka", Directive::Set(Property::AmbientColor)),
        ("Ke", Directive::Set(Property::EmissiveColor)),
        ("Kd", Directive::Set(Property::DiffuseColor)),
        ("Ks", Directive::Set(Property::SpecularColor)),
        ("Ns", Directive::Set(Property::SpecularShininess)),
        ("d", Directive::Set(Property::Dissolve)),
        ("Tr", Directive::Set(Property::Transparency)),
        ("map_Ka", Directive::Set(Property::AmbientMap)),
        ("map_Ke", Directive::Set(Property::EmissiveMap)),
        ("map_Kd", Directive::Set(Property::DiffuseMap)),
        ("map_Ks", Directive::Set(Property::SpecularMap)),
        ("map_Ns", Directive::Set(Property::SpecularShininessMap)),
        ("map_Bump", Directive::Set(Property::BumpMap)),
        ("map_d", Directive::Set(Property::DissolveMap)),
    ];

    /// Case-insensitive lookup of a whole token. `map_Ka` never matches `Ka`
    /// because the token is compared in full, not as a prefix.
    fn from_keyword(token: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(token))
            .map(|&(_, directive)| directive)
    }
}

/// Split a trimmed line at its first whitespace into `(keyword, operand)`.
/// The operand is trimmed and empty when the keyword ends the line.
fn split_directive(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim()),
        None => (line, ""),
    }
}

/// Length of the longest prefix of `token` that is a decimal float literal:
/// `[+-]? (digits [. digits*] | . digits) ([eE] [+-]? digits)?`.
fn numeric_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Lenient float parse: the longest numeric prefix wins (`1.0f` is 1.0) and
/// anything unparseable is NaN. `Infinity` is accepted, `inf` and `nan` are not.
fn parse_float(token: Option<&str>) -> f32 {
    let Some(token) = token else {
        return f32::NAN;
    };
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned.starts_with("Infinity") {
        return if token.starts_with('-') {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
    }
    token[..numeric_prefix_len(token)]
        .parse()
        .unwrap_or(f32::NAN)
}

/// First three tokens as RGB; alpha is always 1.0.
fn parse_color(operand: &str) -> [f32; 4] {
    let mut tokens = operand.split_whitespace();
    let r = parse_float(tokens.next());
    let g = parse_float(tokens.next());
    let b = parse_float(tokens.next());
    [r, g, b, 1.0]
}

/// Only the first token counts; trailing operands or comments are ignored.
fn parse_scalar(operand: &str) -> f32 {
    parse_float(operand.split_whitespace().next())
}

/// Streaming MTL parser. Feed lines in file order, then call [`finish`](Self::finish).
#[derive(Debug)]
pub struct MaterialParser {
    base_dir: PathBuf,
    default_shininess: f32,
    materials: Vec<Material>,
}

impl MaterialParser {
    /// `base_dir` is the directory texture references are resolved against.
    /// It is made absolute once here; querying the working directory is the only
    /// way this can fail.
    pub fn new(base_dir: &Path, options: &MtlOptions) -> Result<Self> {
        Ok(Self {
            base_dir: absolute_dir(base_dir)?,
            default_shininess: options.default_specular_shininess(),
            materials: Vec::new(),
        })
    }

    /// Interpret one line.
    pub fn parse_line(&mut self, line: &str) {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        let (keyword, operand) = split_directive(line);

        let Some(directive) = Directive::from_keyword(keyword) else {
            if !keyword.is_empty() && !keyword.starts_with('#') {
                trace!(directive = keyword, "Ignoring unsupported directive");
            }
            return;
        };

        let Directive::Set(property) = directive else {
            debug!(name = operand, "New material");
            self.materials.push(Material::new(operand, self.default_shininess));
            return;
        };

        let Some(material) = self.materials.last_mut() else {
            trace!(directive = keyword, "Directive before first newmtl, ignoring");
            return;
        };

        trace!(material = %material.name, directive = keyword, operand, "Applying directive");

        let base_dir = &self.base_dir;
        let texture = || Some(resolve_texture_path(base_dir, operand));

        match property {
            Property::AmbientColor => material.ambient_color = Some(parse_color(operand)),
            Property::EmissiveColor => material.emissive_color = Some(parse_color(operand)),
            Property::DiffuseColor => material.diffuse_color = Some(parse_color(operand)),
            Property::SpecularColor => material.specular_color = Some(parse_color(operand)),
            Property::SpecularShininess => material.specular_shininess = parse_scalar(operand),
            // `d` and `Tr` share the slot; the later line wins.
            Property::Dissolve | Property::Transparency => {
                material.alpha = Some(parse_scalar(operand));
            }
            Property::AmbientMap => material.ambient_texture = texture(),
            Property::EmissiveMap => material.emissive_texture = texture(),
            Property::DiffuseMap => material.diffuse_texture = texture(),
            Property::SpecularMap => material.specular_texture = texture(),
            Property::SpecularShininessMap => material.specular_shininess_texture = texture(),
            Property::BumpMap => material.normal_texture = texture(),
            Property::DissolveMap => material.alpha_texture = texture(),
        }
    }

    /// End of input: hand back every material in file order.
    pub fn finish(self) -> Vec<Material> {
        self.materials
    }
}

/// Parse a complete sequence of lines.
pub fn parse_mtl<I>(lines: I, base_dir: &Path, options: &MtlOptions) -> Result<Vec<Material>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parser = MaterialParser::new(base_dir, options)?;
    for line in lines {
        parser.parse_line(line.as_ref());
    }
    Ok(parser.finish())
}
