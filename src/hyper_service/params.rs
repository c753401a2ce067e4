use crate::router::Target;

use std::str::FromStr;

/// Owned form of a match result, detached from the request path so it can
/// cross into a `'static` handler future. Values are stored as offsets
/// into one copy of the path.
pub struct OwnedParams {
    path: Option<String>,
    offsets: Vec<(String, usize, usize)>,
    id: Option<(usize, usize)>,
}

impl OwnedParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        let path = self.path.as_ref()?;
        self.offsets
            .iter()
            .find_map(|&(ref n, s, e)| if n == name { Some(&path[s..e]) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// The extracted trailing resource identifier, if any.
    pub fn id(&self) -> Option<&str> {
        let path = self.path.as_ref()?;
        let (s, e) = self.id?;
        Some(&path[s..e])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let path = self.path.as_deref().unwrap_or("");
        self.offsets
            .iter()
            .map(move |&(ref n, s, e)| (n.as_str(), &path[s..e]))
    }
}

impl OwnedParams {
    pub(super) fn empty() -> Self {
        Self {
            path: None,
            offsets: Vec::new(),
            id: None,
        }
    }

    // `target` must have been resolved from `path`: param values and the
    // identifier are subslices of it.
    pub(super) fn new(path: &str, target: &Target<'_>) -> Self {
        let base = path.as_ptr() as usize;
        let span = |value: &str| {
            let start = (value.as_ptr() as usize) - base;
            (start, start + value.len())
        };

        let offsets: Vec<(String, usize, usize)> = target
            .params
            .iter()
            .map(|&(name, value)| {
                let (s, e) = span(value);
                (name.to_owned(), s, e)
            })
            .collect();
        let id = target.id.map(span);

        let path = if offsets.is_empty() && id.is_none() {
            None
        } else {
            Some(path.to_owned())
        };
        Self { path, offsets, id }
    }
}
