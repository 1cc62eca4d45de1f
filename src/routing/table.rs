//! The route table.
//!
//! # Responsibilities
//! - Store route records in declaration order
//! - Reject duplicate paths and names at construction
//! - Resolve a requested path, following redirects
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc`, no locks)
//! - First match in declaration order wins; ordering is the author's contract
//! - Redirect chains are bounded by `max_redirects`
//! - O(n) scan over routes (tables are small)

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{RouteConfig, RouteManifest, RouterConfig};
use crate::observability::metrics;
use crate::routing::{
    Location, MatchedRoute, NotFound, PathPattern, Redirect, ResolveError, Resolution,
    RouteMeta, RouteTableError, Step,
};
use crate::view::{ViewFactory, ViewRegistry};

/// Where a route leads.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    View(Arc<dyn ViewFactory>),
    Redirect(String),
}

/// A declarative route entry.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: Option<String>,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// A route rendering `view`.
    pub fn view(path: impl Into<String>, view: Arc<dyn ViewFactory>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View(view),
            meta: RouteMeta::default(),
        }
    }

    /// A route that sends navigation on to `target`.
    pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(target.into()),
            meta: RouteMeta::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// A descriptor with its compiled path.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub descriptor: RouteDescriptor,
    pattern: PathPattern,
}

impl RouteRecord {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    fn matched(
        &self,
        view: &Arc<dyn ViewFactory>,
        location: Location,
        redirected_from: Vec<String>,
    ) -> MatchedRoute {
        MatchedRoute {
            name: self.descriptor.name.clone(),
            pattern: self.descriptor.path.clone(),
            location,
            meta: self.descriptor.meta.clone(),
            view: Arc::clone(view),
            redirected_from,
        }
    }
}

/// Ordered, immutable collection of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    names: HashMap<String, usize>,
    config: RouterConfig,
}

impl RouteTable {
    /// Build a table with default matching options.
    pub fn new(descriptors: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        Self::with_config(descriptors, RouterConfig::default())
    }

    /// Build a table. Fails on duplicate paths, duplicate names, malformed
    /// paths or a zero redirect bound.
    pub fn with_config(
        descriptors: Vec<RouteDescriptor>,
        config: RouterConfig,
    ) -> Result<Self, RouteTableError> {
        if config.max_redirects == 0 {
            return Err(RouteTableError::ZeroRedirectBound);
        }

        let mut records: Vec<RouteRecord> = Vec::with_capacity(descriptors.len());
        let mut keys: HashMap<String, usize> = HashMap::new();
        let mut names: HashMap<String, usize> = HashMap::new();

        for (index, descriptor) in descriptors.into_iter().enumerate() {
            check_route_path(&descriptor.path)?;
            if let RouteTarget::Redirect(target) = &descriptor.target {
                check_redirect_target(target)?;
            }

            let pattern = PathPattern::new(descriptor.path.clone(), &config);
            if let Some(&first) = keys.get(&pattern.key()) {
                return Err(RouteTableError::DuplicatePath {
                    path: descriptor.path,
                    first,
                    second: index,
                });
            }
            keys.insert(pattern.key(), index);

            if let Some(name) = &descriptor.name {
                if let Some(&first) = names.get(name) {
                    return Err(RouteTableError::DuplicateName {
                        name: name.clone(),
                        first,
                        second: index,
                    });
                }
                names.insert(name.clone(), index);
            }

            records.push(RouteRecord { descriptor, pattern });
        }

        tracing::debug!(routes = records.len(), "Route table built");
        Ok(Self {
            records,
            names,
            config,
        })
    }

    /// Build a table from a manifest, binding component names through `registry`.
    pub fn from_manifest(
        manifest: &RouteManifest,
        registry: &ViewRegistry,
    ) -> Result<Self, RouteTableError> {
        let descriptors = manifest
            .routes
            .iter()
            .map(|route| bind_route(route, registry))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_config(descriptors, manifest.router.clone())
    }

    /// Resolve `requested`, following redirects.
    pub fn resolve(&self, requested: &str) -> Result<Resolution, ResolveError> {
        let mut location = Location::parse(requested);
        let mut chain: Vec<String> = Vec::new();

        loop {
            let Some(record) = self.find(&location.path) else {
                tracing::debug!(requested, path = %location.path, "No route matched");
                metrics::record_resolution("not_found");
                return Ok(Resolution::NotFound(NotFound {
                    location,
                    redirected_from: chain,
                }));
            };

            match &record.descriptor.target {
                RouteTarget::View(view) => {
                    tracing::debug!(
                        requested,
                        path = %location.path,
                        component = view.component(),
                        "Route matched"
                    );
                    metrics::record_resolution("matched");
                    return Ok(Resolution::Matched(record.matched(view, location, chain)));
                }
                RouteTarget::Redirect(target) => {
                    if chain.len() >= self.config.max_redirects {
                        metrics::record_resolution("redirect_loop");
                        chain.push(location.path);
                        return Err(ResolveError::RedirectLoop {
                            start: requested.to_string(),
                            hops: chain.len() - 1,
                            chain,
                        });
                    }
                    tracing::trace!(from = %location.path, to = %target, "Following redirect");
                    let next = location.redirect_to(target);
                    chain.push(location.path);
                    location = next;
                }
            }
        }
    }

    /// Resolve the route registered under `name`.
    pub fn resolve_name(&self, name: &str) -> Option<Result<Resolution, ResolveError>> {
        self.get_by_name(name)
            .map(|record| self.resolve(&record.descriptor.path))
    }

    /// Match a single step without following redirects.
    pub fn resolve_once(&self, requested: &str) -> Step {
        self.step(Location::parse(requested))
    }

    pub fn get_by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.names.get(name).and_then(|&index| self.records.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    fn find(&self, path: &str) -> Option<&RouteRecord> {
        self.records.iter().find(|record| record.pattern.matches(path))
    }

    fn step(&self, location: Location) -> Step {
        let Some(record) = self.find(&location.path) else {
            return Step::NotFound(NotFound {
                location,
                redirected_from: Vec::new(),
            });
        };

        match &record.descriptor.target {
            RouteTarget::View(view) => Step::Matched(record.matched(view, location, Vec::new())),
            RouteTarget::Redirect(target) => Step::Redirect(Redirect {
                name: record.descriptor.name.clone(),
                to: location.redirect_to(target),
                from: location,
            }),
        }
    }
}

/// Declared paths are absolute and carry no query or hash; requests are
/// stripped of both before matching.
fn check_route_path(path: &str) -> Result<(), RouteTableError> {
    let reason = if !path.starts_with('/') {
        "must start with '/'"
    } else if path.contains(['?', '#']) {
        "must not contain a query or hash"
    } else {
        return Ok(());
    };
    Err(RouteTableError::InvalidPath {
        path: path.to_string(),
        reason,
    })
}

fn check_redirect_target(target: &str) -> Result<(), RouteTableError> {
    if target.starts_with('/') {
        Ok(())
    } else {
        Err(RouteTableError::InvalidPath {
            path: target.to_string(),
            reason: "redirect target must start with '/'",
        })
    }
}

fn bind_route(route: &RouteConfig, registry: &ViewRegistry) -> Result<RouteDescriptor, RouteTableError> {
    let descriptor = match (&route.component, &route.redirect) {
        (Some(component), None) => {
            let view = registry.get(component).ok_or_else(|| RouteTableError::UnknownComponent {
                path: route.path.clone(),
                component: component.clone(),
            })?;
            RouteDescriptor::view(route.path.clone(), view)
        }
        (None, Some(target)) => RouteDescriptor::redirect(route.path.clone(), target.clone()),
        (Some(_), Some(_)) => {
            return Err(RouteTableError::InvalidTarget {
                path: route.path.clone(),
                reason: "declares both a component and a redirect",
            })
        }
        (None, None) => {
            return Err(RouteTableError::InvalidTarget {
                path: route.path.clone(),
                reason: "declares neither a component nor a redirect",
            })
        }
    };

    let descriptor = descriptor.with_meta(route.meta.clone());
    Ok(match &route.name {
        Some(name) => descriptor.named(name.clone()),
        None => descriptor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::StaticView;

    fn view(component: &str) -> Arc<dyn ViewFactory> {
        Arc::new(StaticView::new(component))
    }

    fn matched(resolution: Resolution) -> MatchedRoute {
        match resolution {
            Resolution::Matched(matched) => matched,
            Resolution::NotFound(nf) => panic!("expected a match, got not-found for {}", nf.location),
        }
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            RouteDescriptor::view("/git", view("GitView")),
            RouteDescriptor::view("/git", view("OtherView")),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePath {
                path: "/git".into(),
                first: 0,
                second: 1,
            }
        );
    }

    #[test]
    fn test_equivalent_paths_are_duplicates() {
        let err = RouteTable::new(vec![
            RouteDescriptor::view("/git", view("GitView")),
            RouteDescriptor::view("/GIT/", view("OtherView")),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePath { .. }));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            RouteDescriptor::view("/", view("HomeView")).named("home"),
            RouteDescriptor::view("/start", view("HomeView")).named("home"),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicateName { ref name, .. } if name == "home"));
    }

    #[test]
    fn test_relative_paths_rejected() {
        let err = RouteTable::new(vec![RouteDescriptor::view("git", view("GitView"))]).unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidPath { .. }));

        let err = RouteTable::new(vec![RouteDescriptor::redirect("/", "home")]).unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidPath { ref path, .. } if path == "home"));
    }

    #[test]
    fn test_redirect_targets_must_be_absolute() {
        for target in ["", "?x=1", "#top"] {
            let err = RouteTable::new(vec![
                RouteDescriptor::redirect("/old", target),
                RouteDescriptor::view("/", view("HomeView")),
            ])
            .unwrap_err();
            assert!(
                matches!(err, RouteTableError::InvalidPath { ref path, .. } if path == target),
                "target {:?} accepted",
                target
            );
        }
    }

    #[test]
    fn test_route_paths_with_query_or_hash_rejected() {
        for path in ["/git?tab=log", "/git#top"] {
            let err = RouteTable::new(vec![RouteDescriptor::view(path, view("GitView"))]).unwrap_err();
            assert!(matches!(err, RouteTableError::InvalidPath { .. }), "path {:?} accepted", path);
        }
    }

    #[test]
    fn test_manifest_route_needs_exactly_one_target() {
        let registry = ViewRegistry::placeholders(["HomeView"]);
        let mut manifest = RouteManifest::default();
        manifest.routes.push(RouteConfig {
            path: "/".into(),
            name: None,
            component: Some("HomeView".into()),
            redirect: Some("/home".into()),
            meta: RouteMeta::default(),
        });
        let err = RouteTable::from_manifest(&manifest, &registry).unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidTarget { ref path, .. } if path == "/"));

        manifest.routes[0].component = None;
        manifest.routes[0].redirect = None;
        let err = RouteTable::from_manifest(&manifest, &registry).unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidTarget { .. }));
    }

    #[test]
    fn test_zero_redirect_bound_rejected() {
        let err = RouteTable::with_config(
            vec![RouteDescriptor::view("/", view("HomeView"))],
            RouterConfig {
                max_redirects: 0,
                ..RouterConfig::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, RouteTableError::ZeroRedirectBound);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let table = RouteTable::new(vec![
            RouteDescriptor::view("/", view("HomeView")),
            RouteDescriptor::view("/git", view("GitView")),
            RouteDescriptor::redirect("/home", "/"),
        ])
        .unwrap();
        let paths: Vec<&str> = table.iter().map(|r| r.pattern().as_str()).collect();
        assert_eq!(paths, vec!["/", "/git", "/home"]);
    }

    #[test]
    fn test_case_sensitive_tables_keep_variants_apart() {
        let table = RouteTable::with_config(
            vec![
                RouteDescriptor::view("/Docs", view("First")),
                RouteDescriptor::view("/docs", view("Second")),
            ],
            RouterConfig {
                sensitive: true,
                ..RouterConfig::default()
            },
        )
        .unwrap();
        assert_eq!(matched(table.resolve("/Docs").unwrap()).component(), "First");
        assert_eq!(matched(table.resolve("/docs").unwrap()).component(), "Second");
    }

    #[test]
    fn test_redirect_chain_followed() {
        let table = RouteTable::new(vec![
            RouteDescriptor::redirect("/a", "/b"),
            RouteDescriptor::redirect("/b", "/c"),
            RouteDescriptor::view("/c", view("CView")),
        ])
        .unwrap();

        let route = matched(table.resolve("/a").unwrap());
        assert_eq!(route.component(), "CView");
        assert_eq!(route.location.path, "/c");
        assert_eq!(route.redirected_from, vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn test_redirect_loop_bounded() {
        let table = RouteTable::new(vec![
            RouteDescriptor::redirect("/a", "/b"),
            RouteDescriptor::redirect("/b", "/a"),
        ])
        .unwrap();

        let ResolveError::RedirectLoop { start, hops, chain } = table.resolve("/a").unwrap_err();
        assert_eq!(start, "/a");
        assert_eq!(hops, 10);
        assert_eq!(chain.len(), 11);
    }

    #[test]
    fn test_redirect_bound_is_configurable() {
        let table = RouteTable::with_config(
            vec![
                RouteDescriptor::redirect("/a", "/b"),
                RouteDescriptor::redirect("/b", "/c"),
                RouteDescriptor::view("/c", view("CView")),
            ],
            RouterConfig {
                max_redirects: 1,
                ..RouterConfig::default()
            },
        )
        .unwrap();
        assert!(table.resolve("/b").is_ok());
        assert!(table.resolve("/a").is_err());
    }

    #[test]
    fn test_redirect_to_missing_route_is_not_found() {
        let table = RouteTable::new(vec![RouteDescriptor::redirect("/old", "/gone")]).unwrap();
        match table.resolve("/old").unwrap() {
            Resolution::NotFound(nf) => {
                assert_eq!(nf.location.path, "/gone");
                assert_eq!(nf.redirected_from, vec!["/old".to_string()]);
            }
            Resolution::Matched(_) => panic!("expected not-found"),
        }
    }

    #[test]
    fn test_resolve_once_reports_redirect() {
        let table = RouteTable::new(vec![
            RouteDescriptor::redirect("/", "/github-box"),
            RouteDescriptor::view("/github-box", view("GithubBox")),
        ])
        .unwrap();

        match table.resolve_once("/?x=1") {
            Step::Redirect(redirect) => {
                assert_eq!(redirect.from.path, "/");
                assert_eq!(redirect.to.full_path(), "/github-box?x=1");
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_by_name() {
        let table = RouteTable::new(vec![
            RouteDescriptor::view("/", view("HomeView")).named("home"),
            RouteDescriptor::view("/git", view("GitView")).named("git"),
        ])
        .unwrap();

        let route = matched(table.resolve_name("git").unwrap().unwrap());
        assert_eq!(route.location.path, "/git");
        assert_eq!(route.name.as_deref(), Some("git"));
        assert!(table.resolve_name("missing").is_none());
    }
}
