//! Markup to terminal glyphs.
//!
//! Terms carry LaTeX-like markup (`\frac{dp}{dz}`, `\rho g`, `u_*^2`). A
//! terminal cannot typeset it, so this module flattens it into a short line of
//! Unicode: Greek letters and operators become their symbols, fractions become
//! `a/b`, and scripts use super/subscript code points where Unicode has them.

use crate::core::Term;

/// Render markup source as a single line of glyphs.
///
/// Unknown commands are printed by name, and stray braces are dropped, so
/// the result is always something readable.
pub fn render_markup(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut pos = 0;
    render_seq(&chars, &mut pos, false)
}

/// Tile label for a term: `−` prefix for negative terms, then the glyphs.
pub fn term_label(term: &Term) -> String {
    let glyphs = render_markup(term.markup().source());
    if term.sign().is_negative() {
        format!("−{}", glyphs)
    } else {
        glyphs
    }
}

fn render_seq(chars: &[char], pos: &mut usize, in_group: bool) -> String {
    let mut out = String::new();
    while let Some(&c) = chars.get(*pos) {
        *pos += 1;
        match c {
            '}' if in_group => return out,
            '{' => out.push_str(&render_seq(chars, pos, true)),
            '}' => {}
            '\\' => out.push_str(&render_command(chars, pos)),
            '^' => {
                let arg = render_arg(chars, pos);
                out.push_str(&superscript(&arg));
            }
            '_' => {
                let arg = render_arg(chars, pos);
                out.push_str(&subscript(&arg));
            }
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}

/// A command or script argument: a braced group or a single token.
fn render_arg(chars: &[char], pos: &mut usize) -> String {
    while chars.get(*pos).is_some_and(|c| c.is_whitespace()) {
        *pos += 1;
    }
    let Some(&c) = chars.get(*pos) else {
        return String::new();
    };
    *pos += 1;
    match c {
        '{' => render_seq(chars, pos, true),
        '\\' => render_command(chars, pos),
        c => c.to_string(),
    }
}

fn render_command(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while chars.get(*pos).is_some_and(|c| c.is_ascii_alphabetic()) {
        *pos += 1;
    }

    if *pos == start {
        // Control symbol: spacing commands vanish, escapes print themselves.
        let Some(&c) = chars.get(*pos) else {
            return String::new();
        };
        *pos += 1;
        return match c {
            ',' | ';' | ':' | '!' => String::new(),
            c => c.to_string(),
        };
    }

    let name: String = chars[start..*pos].iter().collect();
    match name.as_str() {
        "frac" | "dfrac" | "tfrac" => {
            let num = render_arg(chars, pos);
            let den = render_arg(chars, pos);
            format!("{}/{}", fraction_part(&num), fraction_part(&den))
        }
        "sqrt" => format!("√{}", fraction_part(&render_arg(chars, pos))),
        "operatorname" | "mathrm" | "mathit" | "mathbf" | "text" => render_arg(chars, pos),
        "left" | "right" | "displaystyle" => String::new(),
        _ => symbol(&name).map(str::to_owned).unwrap_or(name),
    }
}

fn fraction_part(part: &str) -> String {
    let compound = part.chars().count() > 1
        && part
            .chars()
            .any(|c| matches!(c, '+' | '-' | '−' | '/' | '·' | '×' | ' '));
    if compound {
        format!("({})", part)
    } else {
        part.to_owned()
    }
}

fn superscript(arg: &str) -> String {
    match arg.chars().map(superscript_char).collect::<Option<String>>() {
        Some(s) => s,
        None if arg.chars().count() > 1 => format!("^({})", arg),
        None => format!("^{}", arg),
    }
}

fn subscript(arg: &str) -> String {
    arg.chars()
        .map(subscript_char)
        .collect::<Option<String>>()
        .unwrap_or_else(|| arg.to_owned())
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' | '−' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        _ => return None,
    })
}

fn subscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' | '−' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'u' => 'ᵤ',
        'v' => 'ᵥ',
        'x' => 'ₓ',
        _ => return None,
    })
}

fn symbol(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" | "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" | "vartheta" => "θ",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "phi" | "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        "partial" => "∂",
        "nabla" => "∇",
        "cdot" => "·",
        "times" => "×",
        "infty" => "∞",
        "pm" => "±",
        "approx" => "≈",
        "prime" => "′",
        "ast" => "*",
        _ => return None,
    })
}
