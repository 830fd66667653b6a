//! Parse assembly descriptions into a component graph
//!
//! ```text
//! # production wiring
//! component spa fill lightblue inbound [] outbound [semicircle]
//! component fetch fill yellow inbound [semicircle] outbound []
//! spa -> fetch : production
//! ```
//!
//! A `component` line merges the clauses it lists into the named component;
//! omitted clauses leave the attribute as it was. A `SOURCE -> TARGET : ASSEMBLY`
//! line adds a connection. `#` starts a comment that runs to the end of the line.

use miette::SourceSpan;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::{LoadError, SourceContext};
use crate::graph::{ComponentAttributes, ComponentGraph, Connector};

#[derive(Parser)]
#[grammar = "assembly.pest"]
pub struct AssemblyParser;

/// Parse an assembly description.
pub fn parse(source: &str) -> Result<ComponentGraph, LoadError> {
    parse_named("<input>", source)
}

/// Parse an assembly description; `name` labels the source in diagnostics.
pub fn parse_named(name: &str, source: &str) -> Result<ComponentGraph, LoadError> {
    let ctx = SourceContext::new(name, source);
    let pairs = AssemblyParser::parse(Rule::program, source)
        .map_err(|err| syntax_error(&ctx, err))?;

    let mut graph = ComponentGraph::new();
    for program in pairs {
        for statement in program.into_inner() {
            match statement.as_rule() {
                Rule::component => load_component(&ctx, statement, &mut graph)?,
                Rule::connection => load_connection(&ctx, statement, &mut graph)?,
                _ => {}
            }
        }
    }

    crate::log::debug!(
        source = name,
        components = graph.components().count(),
        connections = graph.connections().count(),
        "loaded assembly description"
    );
    Ok(graph)
}

fn load_component(
    ctx: &SourceContext,
    pair: Pair<Rule>,
    graph: &mut ComponentGraph,
) -> Result<(), LoadError> {
    let span = span_of(&pair);
    let mut name = None;
    let mut attributes = ComponentAttributes::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::name => name = Some(inner.as_str()),
            Rule::fill => {
                if let Some(colour) = inner.into_inner().find(|p| p.as_rule() == Rule::colour) {
                    attributes.fill = Some(colour.as_str().to_string());
                }
            }
            Rule::inbound => attributes.inbound = Some(connector_list(ctx, inner)?),
            Rule::outbound => attributes.outbound = Some(connector_list(ctx, inner)?),
            _ => {}
        }
    }

    let Some(name) = name else {
        return Err(LoadError::Syntax {
            message: "component without a name".to_string(),
            src: ctx.named_source(),
            span,
        });
    };
    graph.merge_component(name, attributes);
    Ok(())
}

fn load_connection(
    ctx: &SourceContext,
    pair: Pair<Rule>,
    graph: &mut ComponentGraph,
) -> Result<(), LoadError> {
    let span = span_of(&pair);
    let names: Vec<&str> = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::name)
        .map(|p| p.as_str())
        .collect();

    let [source, target, assembly] = names.as_slice() else {
        return Err(LoadError::Syntax {
            message: "expected SOURCE -> TARGET : ASSEMBLY".to_string(),
            src: ctx.named_source(),
            span,
        });
    };
    graph.add_connection(*source, *target, *assembly);
    Ok(())
}

/// The connectors of an `inbound [..]` or `outbound [..]` clause.
fn connector_list(ctx: &SourceContext, pair: Pair<Rule>) -> Result<Vec<Connector>, LoadError> {
    pair.into_inner()
        .flat_map(|list| list.into_inner())
        .filter(|p| p.as_rule() == Rule::kind)
        .map(|kind| {
            kind.as_str()
                .parse::<Connector>()
                .map_err(|err| LoadError::UnknownConnector {
                    name: err.0,
                    src: ctx.named_source(),
                    span: span_of(&kind),
                })
        })
        .collect()
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    SourceSpan::from(span.start()..span.end())
}

fn syntax_error(ctx: &SourceContext, err: pest::error::Error<Rule>) -> LoadError {
    let err = err.renamed_rules(|rule| match rule {
        Rule::EOI => "end of input".to_string(),
        Rule::kw_component => "`component`".to_string(),
        Rule::kw_fill => "`fill`".to_string(),
        Rule::kw_inbound => "`inbound`".to_string(),
        Rule::kw_outbound => "`outbound`".to_string(),
        Rule::connector_list => "connector list".to_string(),
        other => format!("{other:?}"),
    });
    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => SourceSpan::from(pos..pos),
        pest::error::InputLocation::Span((start, end)) => SourceSpan::from(start..end),
    };
    LoadError::Syntax {
        message: err.variant.message().into_owned(),
        src: ctx.named_source(),
        span,
    }
}
