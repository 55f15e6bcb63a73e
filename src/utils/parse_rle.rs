use crate::{GridStorage, LifeError, Result};

fn malformed(msg: impl Into<String>) -> LifeError {
    LifeError::Rle(msg.into())
}

/// Returns a grid of exactly the header's size filled with the parsed RLE pattern.
pub fn parse_rle(data: &[u8]) -> Result<GridStorage> {
    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    // next line must be the header `x = W, y = H[, rule = B3/S23]`
    let header_end = data[i.min(data.len())..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(data.len(), |p| i + p);
    let header = std::str::from_utf8(&data[i.min(data.len())..header_end])
        .map_err(|_| malformed("header is not valid UTF-8"))?;
    let (width, height) = parse_header(header)?;
    let mut grid = GridStorage::blank(height, width)?;
    let (rows, cols) = (grid.rows(), grid.cols());
    i = header_end;

    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, None);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => {
                let j = data[i..]
                    .iter()
                    .position(|c| !c.is_ascii_digit())
                    .map_or(data.len(), |p| i + p);
                let n = std::str::from_utf8(&data[i..j])
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .ok_or_else(|| malformed("run count is too large"))?;
                (i, cnt) = (j, Some(n));
                continue;
            }
            c @ (b'o' | b'b') => {
                let run: usize = cnt.take().unwrap_or(1);
                let end = x
                    .checked_add(run)
                    .ok_or_else(|| malformed("run count is too large"))?;
                if end > cols {
                    return Err(malformed(format!("row {} is wider than {}", y, cols)));
                }
                if c == b'o' {
                    if y >= rows {
                        return Err(malformed(format!("pattern is taller than {}", rows)));
                    }
                    for j in x..end {
                        grid.set(y, j, true);
                    }
                }
                x = end;
            }
            b'$' => {
                let skip = cnt.take().unwrap_or(1);
                (x, y) = (
                    0,
                    y.checked_add(skip)
                        .ok_or_else(|| malformed("run count is too large"))?,
                );
                if y > rows {
                    return Err(malformed(format!("pattern is taller than {}", rows)));
                }
            }
            b'!' => break,
            c if c.is_ascii_whitespace() => {}
            c => return Err(malformed(format!("unexpected symbol {:?}", c as char))),
        }
        i += 1;
    }
    Ok(grid)
}

fn parse_header(header: &str) -> Result<(i64, i64)> {
    let (mut width, mut height) = (None, None);
    for item in header.split(',') {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| malformed(format!("bad header item {:?}", item.trim())))?;
        let (key, value) = (key.trim(), value.trim());
        let parse_size = || {
            value
                .parse::<i64>()
                .map_err(|_| malformed(format!("bad size {:?}", value)))
        };
        match key {
            "x" => width = Some(parse_size()?),
            "y" => height = Some(parse_size()?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                if rule != "B3/S23" && rule != "23/3" {
                    return Err(malformed(format!("unsupported rule {}", value)));
                }
            }
            _ => return Err(malformed(format!("unknown header key {:?}", key))),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(malformed("header must contain both x and y")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &[u8] = b"#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";

    #[test]
    fn test_glider() {
        let grid = parse_rle(GLIDER).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(
            grid.cells(),
            &[false, true, false, false, false, true, true, true, true]
        );
    }

    #[test]
    fn test_multiline_and_blank_rows() {
        let grid = parse_rle(b"x = 4, y = 4\n2o$\n2$\n3bo!").unwrap();
        assert_eq!(grid.population(), 3);
        assert!(grid.get(0, 0) && grid.get(0, 1));
        assert!(grid.get(3, 3));
    }

    #[test]
    fn test_malformed() {
        for data in [
            &b"bo$!"[..],
            b"x = 3\nbo!",
            b"x = 3, y = 3, rule = B36/S23\nbo!",
            b"x = 2, y = 2\n3o!",
            b"x = 2, y = 1\no$o!",
            b"x = 2, y = 2\nbq!",
            b"x = a, y = 2\nbo!",
            b"x = 2, y = 2\nb18446744073709551615o!",
            b"x = 2, y = 2\n$18446744073709551615$!",
        ] {
            let err = parse_rle(data).unwrap_err();
            assert!(matches!(err, LifeError::Rle(_)), "{:?}", err);
        }
        assert_eq!(
            parse_rle(b"x = 0, y = 2\n!"),
            Err(LifeError::InvalidDimension { rows: 2, cols: 0 })
        );
    }
}
