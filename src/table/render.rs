//! CSV and TeX rendering.

use super::labels::MuLabel;
use crate::error::{HarmonicError, Result};
use crate::rational::{frac_str, to_f64, Rational};
use crate::solve::{IpRunner, Query, SolveConfig};
use num_traits::One;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format of [`render_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TableFormat {
    /// Comma-separated, one header line.
    Csv,
    /// A `tabular` environment.
    Tex,
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableFormat::Csv => "csv",
            TableFormat::Tex => "tex",
        })
    }
}

impl FromStr for TableFormat {
    type Err = HarmonicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "csv" => Ok(TableFormat::Csv),
            "tex" => Ok(TableFormat::Tex),
            other => Err(HarmonicError::InvalidConfig(format!(
                "unknown table format {other:?} (expected csv or tex)"
            ))),
        }
    }
}

/// Renders a TeX cell.
///
/// Undefined values become `--` and integers `$n$`. Other values are
/// `\texttt{x.xxxxxxxx}` when `float_only`, else `$\sfrac{p}{q} = \texttt{...}$`.
pub fn tex_str(x: Option<&Rational>, float_only: bool) -> String {
    let Some(x) = x else {
        return "--".to_string();
    };
    if x.denom().is_one() {
        format!("${}$", x.numer())
    } else if float_only {
        format!("\\texttt{{{:.8}}}", to_f64(x))
    } else {
        format!(
            "$\\sfrac{{{}}}{{{}}} = \\texttt{{{:.8}}}$",
            x.numer(),
            x.denom(),
            to_f64(x)
        )
    }
}

/// Solves every `k` in `ks` for the mu families in `labels` and writes one
/// row per `k`.
///
/// `use_float` switches CSV cells to 8-decimal floats and TeX cells to
/// floats only. Tracing follows `config`.
///
/// # Errors
///
/// Propagates solver errors (e.g. `k == 0`) and writer failures.
pub fn render_table<W: Write>(
    ks: impl IntoIterator<Item = usize>,
    labels: &[MuLabel],
    format: TableFormat,
    use_float: bool,
    config: &SolveConfig,
    out: &mut W,
) -> Result<()> {
    let solve_row = |k: usize| -> Result<Vec<Query>> {
        let queries: Vec<Query> = labels.iter().map(|label| label.mu(k)).collect();
        Ok(IpRunner::run(k, &queries, config)?.best_scores())
    };

    match format {
        TableFormat::Csv => {
            let header: Vec<&str> = labels.iter().map(|l| l.name()).collect();
            writeln!(out, "k,{}", header.join(","))?;
            for k in ks {
                let row = solve_row(k)?;
                let mut cells = vec![k.to_string()];
                cells.extend(row.iter().map(|x| frac_str(x.as_ref(), use_float)));
                writeln!(out, "{}", cells.join(","))?;
            }
        }
        TableFormat::Tex => {
            writeln!(out, "\\begin{{tabular}}{{|c|{}}}", "r|".repeat(labels.len()))?;
            let heads: Vec<&str> = labels.iter().map(|l| l.tex_label()).collect();
            writeln!(
                out,
                "\\hline \\diagbox{{$k$}}{{$\\mu$}} & {} \\\\",
                heads.join(" & ")
            )?;
            for k in ks {
                let row = solve_row(k)?;
                let cells: Vec<String> = row.iter().map(|x| tex_str(x.as_ref(), use_float)).collect();
                writeln!(out, "\\hline ${k}$ & {} \\\\", cells.join(" & "))?;
            }
            writeln!(out, "\\hline \\end{{tabular}}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{integer, ratio};

    const DEFAULT_LABELS: [MuLabel; 3] = [MuLabel::Lee, MuLabel::Capr, MuLabel::Eku];

    fn render(kmax: usize, format: TableFormat, use_float: bool) -> String {
        let mut out = Vec::new();
        render_table(
            2..=kmax,
            &DEFAULT_LABELS,
            format,
            use_float,
            &SolveConfig::default(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_exact() {
        assert_eq!(
            render(5, TableFormat::Csv, false),
            "k,lee,capr,eku\n\
             2,2,null,4\n\
             3,7/4,3,19/10\n\
             4,31/18,2,115/66\n\
             5,41/24,11/6,98/57\n"
        );
    }

    #[test]
    fn test_csv_float() {
        assert_eq!(
            render(4, TableFormat::Csv, true),
            "k,lee,capr,eku\n\
             2,2.00000000,null,4.00000000\n\
             3,1.75000000,3.00000000,1.90000000\n\
             4,1.72222222,2.00000000,1.74242424\n"
        );
    }

    #[test]
    fn test_tex() {
        let expected = [
            r"\begin{tabular}{|c|r|r|r|}",
            r"\hline \diagbox{$k$}{$\mu$} & $k/(k-1)$ & $k/(k-2)$ & $k^2/(k^2-k-1)$ \\",
            r"\hline $2$ & $2$ & -- & $4$ \\",
            r"\hline $3$ & $\sfrac{7}{4} = \texttt{1.75000000}$ & $3$ & $\sfrac{19}{10} = \texttt{1.90000000}$ \\",
            r"\hline $4$ & $\sfrac{31}{18} = \texttt{1.72222222}$ & $2$ & $\sfrac{115}{66} = \texttt{1.74242424}$ \\",
            r"\hline \end{tabular}",
        ];
        let text = render(4, TableFormat::Tex, false);
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_tex_str() {
        assert_eq!(tex_str(None, false), "--");
        assert_eq!(tex_str(Some(&integer(3)), true), "$3$");
        assert_eq!(tex_str(Some(&ratio(7, 4)), true), r"\texttt{1.75000000}");
        assert_eq!(
            tex_str(Some(&ratio(7, 4)), false),
            r"$\sfrac{7}{4} = \texttt{1.75000000}$"
        );
    }

    #[test]
    fn test_empty_range_prints_header_only() {
        let mut out = Vec::new();
        render_table(
            2..2,
            &[MuLabel::One],
            TableFormat::Csv,
            false,
            &SolveConfig::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "k,one\n");
    }

    #[test]
    fn test_zero_k_is_rejected() {
        let mut out = Vec::new();
        let err = render_table(
            [0usize],
            &[MuLabel::One],
            TableFormat::Csv,
            false,
            &SolveConfig::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, HarmonicError::InvalidK { k: 0 }));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("csv".parse::<TableFormat>().unwrap(), TableFormat::Csv);
        assert_eq!("tex".parse::<TableFormat>().unwrap(), TableFormat::Tex);
        assert!("html".parse::<TableFormat>().is_err());
        assert_eq!(TableFormat::Tex.to_string(), "tex");
    }
}
