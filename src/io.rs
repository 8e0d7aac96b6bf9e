use crate::error::{DecompError, ErrorKind};
use crate::graph::{BaseGraph, HashMapGraph, HyperGraph, MutableGraph};
use fxhash::FxHashMap;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

fn parse_numbers(tokens: &[&str], line: &str, line_number: usize) -> Result<(usize, usize), DecompError> {
    match tokens {
        [a, b] => match (a.parse::<usize>(), b.parse::<usize>()) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            _ => Err(DecompError::invalid_line(line_number, line)),
        },
        _ => Err(DecompError::invalid_line(line_number, line)),
    }
}

/// Parses `p edge <n> <m>` into `(n, m)`.
pub fn dimacs_p(line: &str, line_number: usize) -> Result<(usize, usize), DecompError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["p", "edge", rest @ ..] => parse_numbers(rest, line, line_number),
        _ => Err(DecompError::invalid_line(line_number, line)),
    }
}

/// Parses `e <u> <v>` into the zero-indexed pair `(u - 1, v - 1)`.
pub fn dimacs_e(line: &str, line_number: usize, n: usize) -> Result<(usize, usize), DecompError> {
    let tokens: Vec<&str> = line.split_whitespace().skip(1).collect();
    let (u, v) = parse_numbers(&tokens, line, line_number)?;
    if u == 0 || v == 0 || u > n || v > n {
        let msg = format!(
            "Line {} references a vertex outside of 1..={}: '{}'.",
            line_number, n, line
        );
        return Err(DecompError::new(ErrorKind::VertexOutOfRange, &msg));
    }
    Ok((u - 1, v - 1))
}

/// Reads DIMACS edge files. Lines before the header may only be comments, any
/// line not starting with `p` or `e` is skipped.
pub struct DimacsRead<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<DimacsRead<T>> for HashMapGraph {
    type Error = DecompError;

    fn try_from(reader: DimacsRead<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph: Option<HashMapGraph> = None;
        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.map_err(|e| DecompError::read_failure(line_number, e))?;
            match line.split_whitespace().next() {
                Some("p") => {
                    if graph.is_some() {
                        let msg = format!("Line {} repeats the problem header.", line_number);
                        return Err(DecompError::new(ErrorKind::InvalidLine, &msg));
                    }
                    let (n, _) = dimacs_p(&line, line_number)?;
                    graph = Some(HashMapGraph::with_vertices(n));
                }
                Some("e") => match graph.as_mut() {
                    Some(graph) => {
                        let (u, v) = dimacs_e(&line, line_number, graph.order())?;
                        graph.add_edge(u, v);
                    }
                    None => return Err(DecompError::missing_header(line_number)),
                },
                _ => {}
            }
        }
        graph.ok_or_else(|| DecompError::new(ErrorKind::MissingHeader, "No 'p edge' header found."))
    }
}

pub struct HyperTreeLibRead<T: Read>(pub T);

#[derive(Default)]
struct AtomBuilder {
    vertex_ids: FxHashMap<String, usize>,
    hypergraph: HyperGraph,
    name: String,
    member: String,
    members: Vec<usize>,
    inside: bool,
}

impl AtomBuilder {
    fn push_member(&mut self, line_number: usize) -> Result<(), DecompError> {
        let name = self.member.trim();
        if name.is_empty() {
            return Err(DecompError::invalid_line(line_number, &self.member));
        }
        let id = match self.vertex_ids.get(name) {
            Some(id) => *id,
            None => {
                let id = self.hypergraph.add_vertex(name);
                self.vertex_ids.insert(String::from(name), id);
                id
            }
        };
        self.members.push(id);
        self.member.clear();
        Ok(())
    }

    fn feed(&mut self, ch: char, line_number: usize) -> Result<(), DecompError> {
        if self.inside {
            match ch {
                ',' => self.push_member(line_number)?,
                ')' => {
                    self.push_member(line_number)?;
                    self.hypergraph.add_edge(self.name.trim(), &self.members);
                    self.members.clear();
                    self.name.clear();
                    self.inside = false;
                }
                '(' => return Err(DecompError::invalid_line(line_number, &self.name)),
                c => self.member.push(c),
            }
        } else {
            match ch {
                '(' => {
                    if self.name.trim().is_empty() {
                        return Err(DecompError::invalid_line(line_number, "("));
                    }
                    self.inside = true;
                }
                ',' | '.' => {
                    if !self.name.trim().is_empty() {
                        return Err(DecompError::invalid_line(line_number, &self.name));
                    }
                }
                ')' => return Err(DecompError::invalid_line(line_number, ")")),
                c => self.name.push(c),
            }
        }
        Ok(())
    }
}

/// Reads hypergraphs written as `name(v1, v2, ...)` atoms separated by `,` and
/// terminated by `.`. A `%` comments out the rest of its line.
impl<T: Read> TryFrom<HyperTreeLibRead<T>> for HyperGraph {
    type Error = DecompError;

    fn try_from(reader: HyperTreeLibRead<T>) -> Result<Self, Self::Error> {
        let mut builder = AtomBuilder::default();
        let reader = BufReader::new(reader.0);
        let mut last_line = 0;
        for (idx, line) in reader.lines().enumerate() {
            last_line = idx + 1;
            let line = line.map_err(|e| DecompError::read_failure(last_line, e))?;
            let content = match line.find('%') {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };
            for ch in content.chars() {
                builder.feed(ch, last_line)?;
            }
            builder.feed(' ', last_line)?;
        }
        if builder.inside || !builder.name.trim().is_empty() {
            return Err(DecompError::invalid_line(last_line, &builder.name));
        }
        Ok(builder.hypergraph)
    }
}

fn open(path: &Path) -> Result<File, DecompError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DecompError::file_not_found(path),
        _ => DecompError::from(e),
    })
}

pub fn read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<HashMapGraph, DecompError> {
    let file = open(path.as_ref())?;
    HashMapGraph::try_from(DimacsRead(BufReader::new(file)))
}

pub fn read_hypertreelib_file<P: AsRef<Path>>(path: P) -> Result<HyperGraph, DecompError> {
    let file = open(path.as_ref())?;
    HyperGraph::try_from(HyperTreeLibRead(file))
}
