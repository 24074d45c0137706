//! Request method-name parsing.
//!
//! The host names plugin invocations `<plugin-path>:<kind>:<detail>`,
//! plus two bare methods: `poll` (liveness probe) and `specs` (handler
//! discovery). The plugin path segment identifies which plugin file the
//! host means; a single-plugin process ignores it.

/// A parsed request method name.
///
/// Borrowed from the method string — parsing allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    /// Liveness probe; answered with `"ok"`.
    Poll,
    /// Handler discovery; answered with the serialized spec list.
    Specs,
    /// Synchronous function invocation by name.
    Function(&'a str),
    /// Autocmd notification for an event/pattern pair.
    Autocmd {
        /// Event name(s), comma-joined as registered.
        event: &'a str,
        /// The autocmd pattern, e.g. `*`.
        pattern: &'a str,
    },
    /// Command invocation by name.
    Command(&'a str),
    /// Anything that fits none of the shapes above.
    Unknown(&'a str),
}

impl<'a> From<&'a str> for Request<'a> {
    fn from(method: &'a str) -> Self {
        match method {
            "poll" => Self::Poll,
            "specs" => Self::Specs,
            _ => {
                let mut parts = method.splitn(3, ':');
                let (Some(_path), Some(kind), Some(detail)) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Self::Unknown(method);
                };
                match kind {
                    "function" => Self::Function(detail),
                    "command" => Self::Command(detail),
                    "autocmd" => match detail.split_once(':') {
                        Some((event, pattern)) => Self::Autocmd { event, pattern },
                        None => Self::Unknown(method),
                    },
                    _ => Self::Unknown(method),
                }
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_and_specs_are_bare() {
        assert_eq!(Request::from("poll"), Request::Poll);
        assert_eq!(Request::from("specs"), Request::Specs);
    }

    #[test]
    fn function_requests_carry_the_name() {
        assert_eq!(
            Request::from("/rplugin/statusline:function:BuildStatusLine"),
            Request::Function("BuildStatusLine")
        );
    }

    #[test]
    fn command_requests_carry_the_name() {
        assert_eq!(
            Request::from("/rplugin/statusline:command:LintInfo"),
            Request::Command("LintInfo")
        );
    }

    #[test]
    fn autocmd_requests_split_event_and_pattern() {
        assert_eq!(
            Request::from("/rplugin/statusline:autocmd:VimEnter,ColorScheme:*"),
            Request::Autocmd {
                event: "VimEnter,ColorScheme",
                pattern: "*",
            }
        );
    }

    #[test]
    fn autocmd_pattern_may_contain_colons() {
        // Only the first colon after the event splits; the rest belongs
        // to the pattern.
        assert_eq!(
            Request::from("p:autocmd:BufEnter:*.rs:*.toml"),
            Request::Autocmd {
                event: "BufEnter",
                pattern: "*.rs:*.toml",
            }
        );
    }

    #[test]
    fn autocmd_without_pattern_is_unknown() {
        assert_eq!(
            Request::from("p:autocmd:VimEnter"),
            Request::Unknown("p:autocmd:VimEnter")
        );
    }

    #[test]
    fn too_few_segments_is_unknown() {
        assert_eq!(Request::from("p:function"), Request::Unknown("p:function"));
        assert_eq!(Request::from("noise"), Request::Unknown("noise"));
        assert_eq!(Request::from(""), Request::Unknown(""));
    }

    #[test]
    fn unknown_kind_is_unknown() {
        assert_eq!(
            Request::from("p:rpcnotify:Thing"),
            Request::Unknown("p:rpcnotify:Thing")
        );
    }

    #[test]
    fn parsing_borrows_from_the_method_string() {
        let method = String::from("p:function:GetLintStatus");
        let request = Request::from(method.as_str());
        assert_eq!(request, Request::Function("GetLintStatus"));
    }
}
