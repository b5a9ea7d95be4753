use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::{debug, warn};

pub use header::{EdgeWeightType, Header, ProblemType};

use self::header::KeyValue;
use super::{
    error::{Error, Result},
    point::{NodeId, Point},
};

mod header;

const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";

type NomResult<I, O> = nom::IResult<I, O, nom::error::VerboseError<I>>;

/// Points read from a TSPLIB-style file, in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Problem {
    pub header: Header,
    pub points: Vec<Point>,
}

impl Problem {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
        Self::try_from_tsp(BufReader::new(file)).map_err(|e| Error::file_access(path, e))
    }

    /// Reads the preamble up to the `NODE_COORD_SECTION` marker, then one
    /// `id x y` triplet per line until the first line that is not one.
    /// Input without a marker yields no points. Bytes that are not UTF-8 are
    /// replaced rather than rejected.
    pub fn try_from_tsp<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut parser = LineParser::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if parser.feed(line) == Continue::No {
                break;
            }
        }
        Ok(parser.finish())
    }

    pub fn parse(contents: &str) -> Self {
        Self::try_from_tsp(contents.as_bytes())
            .unwrap_or_else(|e| unreachable!("reading from memory failed: {}", e))
    }

    pub fn first_id(&self) -> Option<NodeId> {
        self.points.first().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Eq, PartialEq)]
enum Continue {
    Yes,
    No,
}

enum Section {
    Preamble,
    Coordinates,
}

struct LineParser {
    key_value: KeyValue,
    section: Section,
    problem: Problem,
}

impl LineParser {
    fn new() -> Self {
        Self {
            key_value: KeyValue::new(),
            section: Section::Preamble,
            problem: Problem::default(),
        }
    }

    fn feed(&mut self, line: &str) -> Continue {
        match self.section {
            Section::Preamble => {
                if line.contains(NODE_COORD_SECTION) {
                    self.section = Section::Coordinates;
                } else {
                    self.problem.header.read_line(&self.key_value, line);
                }
                Continue::Yes
            }
            Section::Coordinates => {
                if line.trim().is_empty() {
                    return Continue::Yes;
                }
                match coordinate(line) {
                    Ok((_, point)) => {
                        self.problem.points.push(point);
                        Continue::Yes
                    }
                    Err(_) => {
                        debug!("coordinates end before '{}'", line);
                        Continue::No
                    }
                }
            }
        }
    }

    fn finish(self) -> Problem {
        let problem = self.problem;

        if let Section::Preamble = self.section {
            warn!("no {} marker found, problem has no points", NODE_COORD_SECTION);
        }

        if let Some(dimension) = problem.header.dimension {
            if dimension != problem.points.len() {
                warn!(
                    "DIMENSION is {} but {} coordinates were read",
                    dimension,
                    problem.points.len()
                );
            }
        }

        problem
    }
}

// One `id x y` line with finite coordinates, and nothing else on it but spaces or tabs
fn coordinate(i: &str) -> NomResult<&str, Point> {
    use nom::{
        character::complete::{digit1, space0, space1},
        combinator::{all_consuming, map, map_res, verify},
        number::complete::double,
        sequence::{delimited, preceded, tuple},
    };

    map(
        all_consuming(delimited(
            space0,
            tuple((
                map_res(digit1, usize::from_str),
                preceded(space1, verify(double, |v: &f64| v.is_finite())),
                preceded(space1, verify(double, |v: &f64| v.is_finite())),
            )),
            space0,
        )),
        |(id, x, y)| Point::new(id, x, y),
    )(i)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;

    use super::{coordinate, EdgeWeightType, Problem, ProblemType};
    use crate::tsp::{nearest_neighbor, DistanceMode, Error, Point};

    const TRIANGLE: &str = "NAME : triangle\n\
                            TYPE : TSP\n\
                            DIMENSION : 3\n\
                            EDGE_WEIGHT_TYPE : EUC_2D\n\
                            NODE_COORD_SECTION\n\
                            1 0 0\n\
                            2 0 3\n\
                            3 4 0\n\
                            EOF\n";

    #[test]
    fn coordinate_line() {
        let (_, p) = coordinate("  12\t-3.5  4e2 ").unwrap();
        assert_eq!(p, Point::new(12, -3.5, 400.0));
    }

    #[test]
    fn coordinate_line_rejects_extra_fields() {
        assert!(coordinate("1 2 3 4").is_err());
        assert!(coordinate("1 2").is_err());
        assert!(coordinate("EOF").is_err());
        assert!(coordinate("-1 2 3").is_err());
    }

    #[test]
    fn parses_header_and_points() {
        let problem = Problem::parse(TRIANGLE);

        assert_eq!(problem.header.name.as_deref(), Some("triangle"));
        assert_eq!(problem.header.problem_type, Some(ProblemType::Tsp));
        assert_eq!(problem.header.dimension, Some(3));
        assert_eq!(problem.header.edge_weight_type, Some(EdgeWeightType::Euc2d));
        assert_eq!(
            problem.points,
            vec![
                Point::new(1, 0.0, 0.0),
                Point::new(2, 0.0, 3.0),
                Point::new(3, 4.0, 0.0),
            ]
        );
        assert_eq!(problem.first_id(), Some(1));
    }

    #[test]
    fn reader_matches_str() {
        let from_reader = Problem::try_from_tsp(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(from_reader, Problem::parse(TRIANGLE));
    }

    #[test]
    fn stops_at_first_bad_line() {
        let problem = Problem::parse(
            "NODE_COORD_SECTION\n1 1.0 1.0\n\n2 2.0 2.0\nDEMAND_SECTION\n3 3.0 3.0\n",
        );
        assert_eq!(problem.len(), 2);
        assert_eq!(problem.points[1].id, 2);
    }

    #[test]
    fn stops_at_non_finite_coordinate() {
        assert!(coordinate("2 nan 0").is_err());
        assert!(coordinate("2 0 inf").is_err());
        assert!(coordinate("2 -infinity 0").is_err());

        let problem = Problem::parse("NODE_COORD_SECTION\n1 0 0\n2 nan 0\n3 1 0\n4 inf 0\n");
        assert_eq!(problem.points, vec![Point::new(1, 0.0, 0.0)]);
    }

    #[test]
    fn tolerates_non_utf8_bytes() {
        let mut input = b"NAME : latin\nCOMMENT : caf".to_vec();
        input.push(0xE9);
        input.extend_from_slice(b"\r\nNODE_COORD_SECTION\r\n1 0 0\r\n2 3 4\r\nEOF\r\n");

        let problem = Problem::try_from_tsp(&input[..]).unwrap();
        assert_eq!(problem.header.name.as_deref(), Some("latin"));
        assert_eq!(problem.header.comment.as_deref(), Some("caf\u{FFFD}"));
        assert_eq!(
            problem.points,
            vec![Point::new(1, 0.0, 0.0), Point::new(2, 3.0, 4.0)]
        );
    }

    #[test]
    fn marker_may_share_a_line() {
        let problem = Problem::parse("some preamble\n== NODE_COORD_SECTION ==\n5 1 1\n");
        assert_eq!(problem.points, vec![Point::new(5, 1.0, 1.0)]);
    }

    #[test]
    fn missing_marker_is_empty() {
        let problem = Problem::parse("NAME : nothing\n1 0 0\n2 3 4\n");
        assert!(problem.is_empty());
        assert_eq!(problem.first_id(), None);

        let err = nearest_neighbor(&problem.points, 1, DistanceMode::Exact).unwrap_err();
        assert!(matches!(err, Error::EmptyCollection));
    }

    #[test]
    fn missing_file() {
        let err = Problem::open("./inputs/does-not-exist.tsp").unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }));
        assert!(err.to_string().contains("does-not-exist.tsp"));
    }

    #[test]
    fn sample_file() {
        let input = File::open("./inputs/square9.tsp").unwrap();
        let problem = Problem::try_from_tsp(BufReader::new(input));

        if problem.is_err() {
            eprintln!("{}", problem.as_ref().unwrap_err());
        }

        assert!(problem.is_ok());
        let problem = problem.unwrap();

        assert_eq!(problem.header.name.as_deref(), Some("square9"));
        assert_eq!(problem.header.dimension, Some(9));
        assert_eq!(problem.len(), 9);
        assert_eq!(problem.points[4], Point::new(5, 10.0, 10.0));

        let opened = Problem::open("./inputs/square9.tsp").unwrap();
        assert_eq!(opened, problem);
    }
}
