use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// A successful match: decoded handler/action names, named path params and
/// the optional trailing resource identifier.
#[derive(Debug, PartialEq, Eq)]
pub struct Target<'a> {
    pub handler: &'a str,
    pub action: &'a str,
    pub params: Params<'a>,
    pub id: Option<&'a str>,
}

/// Named path parameters in left-to-right order.
#[derive(Debug, PartialEq, Eq)]
pub struct Params<'a> {
    buf: SmallVec<[(&'a str, &'a str); 4]>,
}

impl Params<'_> {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl<'a> Deref for Params<'a> {
    type Target = [(&'a str, &'a str)];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<'a> Params<'a> {
    /// Re-walks the matched node's own pattern against the path values it
    /// consumed (identifier last, when one was extracted), emitting one
    /// entry per `:name` component. A trailing `:id` satisfied by the
    /// extracted identifier belongs to [`Target::id`] and is skipped.
    pub(super) fn collect(pattern: &'a str, values: &[&'a str], has_id: bool) -> Self {
        let comps: SmallVec<[&str; 4]> = pattern.split('/').collect();
        let start = values.len().saturating_sub(comps.len());

        let mut buf = SmallVec::new();
        for (k, (comp, &value)) in comps.iter().zip(&values[start..]).enumerate() {
            if let Some(name) = comp.strip_prefix(':') {
                if has_id && k + 1 == comps.len() {
                    continue;
                }
                buf.push((name, value));
            }
        }
        Self { buf }
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn trailing_id_is_not_a_param() {
        let params = Params::collect("images/:id", &["images", "507f1f77bcf86cd799439011"], true);
        assert!(params.is_empty());
    }

    #[test]
    fn named_placeholders() {
        let params = Params::collect("posts/:slug", &["posts", "hello-world"], false);
        assert_eq!(params.get("slug"), Some("hello-world"));
        assert_eq!(&*params, &[("slug", "hello-world")]);
    }
}
