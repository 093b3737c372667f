use crate::terminal::{Style, Stylus};
use anyhow::{anyhow, Error};
use sequitur_pl::syntax::Prop;
use sequitur_tableau::Argument;
use std::{
    fs,
    io::{stdin, Read},
};

pub(crate) fn stylus(color: bool) -> Stylus {
    Stylus::new(color)
}

pub(crate) fn logo_style() -> Style {
    Style::new().foreground(59).attribute(term::Attr::Dim)
}

pub(crate) fn info_style() -> Style {
    Style::new().foreground(59).attribute(term::Attr::Bold)
}

pub(crate) fn argument_style() -> Style {
    Style::new().foreground(252)
}

pub(crate) fn valid_style() -> Style {
    Style::new()
        .foreground(term::color::GREEN)
        .attribute(term::Attr::Bold)
}

pub(crate) fn invalid_style() -> Style {
    Style::new()
        .foreground(term::color::RED)
        .attribute(term::Attr::Bold)
}

pub(crate) fn read_argument_from_file(filename: &str) -> Result<Argument, Error> {
    let mut f = fs::File::open(filename)
        .map_err(|e| Error::new(e).context("failed to find the input file"))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;

    parse_argument(&contents)
}

pub(crate) fn read_argument_from_stdin() -> Result<Argument, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let contents = String::from_utf8(buf)?;
    parse_argument(&contents)
}

/// Every non-empty line is a formula; all but the last are premises and the
/// last is the conclusion.
pub(crate) fn parse_argument(text: &str) -> Result<Argument, Error> {
    let mut formulae = Vec::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let prop: Prop = line
            .parse()
            .map_err(|e| Error::new(e).context(format!("failed to parse `{}`", line.trim())))?;
        formulae.push(prop);
    }
    let conclusion = formulae
        .pop()
        .ok_or_else(|| anyhow!("the input contains no formulae"))?;
    Ok(Argument::new(formulae, conclusion))
}
