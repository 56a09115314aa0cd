// Tue Jan 13 2026 - Alex

use crate::config::{Config, OutputStyle};
use crate::structure::{Field, FieldType, Offset, Size, MEMBER_INDENT};
use crate::template::classifier::classify;
use crate::template::context::{Behavior, GenerationContext};
use crate::template::directive::{Directive, DirectivePreprocessor};
use crate::template::emitter::{emitter_for, Emission};
use crate::template::{InputLine, TemplateResult};
use crate::utils::{ContentHasher, Fnv1Hasher};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorState {
    Preprocessing,
    SeekingFirstBody,
    Emitting { body: usize },
    Finalizing,
}

/// Output of one successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTemplate {
    pub class_name: String,
    pub text: String,
    pub parsed_fields: usize,
    pub accumulated_size: u64,
}

/// Turns the pseudocode of one subroutine into a class stub.
///
/// A generator holds no per-input state; every call to [`Generator::generate`]
/// builds a fresh [`GenerationContext`], so one instance may serve many inputs.
pub struct Generator {
    style: OutputStyle,
    behavior: Behavior,
    hasher: Arc<dyn ContentHasher>,
}

impl Generator {
    pub fn new(config: &Config) -> Self {
        Self {
            style: config.style.clone(),
            behavior: config.behavior(),
            hasher: Arc::new(Fnv1Hasher),
        }
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn ContentHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Returns `None` when no line looks like a function signature.
    pub fn generate(&self, lines: &[InputLine]) -> TemplateResult<Option<GeneratedTemplate>> {
        let mut ctx = GenerationContext::new(self.behavior, self.style.field_prefix.clone());
        let mut out = String::new();
        let mut class_name = String::new();
        let mut parsed_fields = 0;
        let mut state = GeneratorState::Preprocessing;

        loop {
            state = match state {
                GeneratorState::Preprocessing => {
                    let applied = DirectivePreprocessor::run(lines, &mut ctx)?;
                    log::debug!("applied {} directive(s)", applied);
                    GeneratorState::SeekingFirstBody
                }
                GeneratorState::SeekingFirstBody => match lines.iter().position(|line| is_signature(line.text())) {
                    Some(body) => GeneratorState::Emitting { body },
                    None => {
                        log::warn!("no subroutine signature found, nothing to parse");
                        return Ok(None);
                    }
                },
                GeneratorState::Emitting { body } => {
                    class_name = self.write_header(lines, &lines[body], &ctx, &mut out);
                    for (position, line) in lines.iter().enumerate().skip(body + 1) {
                        let next = lines.get(position + 1);
                        if self.emit_line(line, next, &mut ctx, &mut out) {
                            parsed_fields += 1;
                        }
                    }
                    GeneratorState::Finalizing
                }
                GeneratorState::Finalizing => {
                    self.write_summary(&ctx, parsed_fields, &mut out);
                    break;
                }
            };
        }

        log::info!("number of fields parsed: {}", parsed_fields);
        Ok(Some(GeneratedTemplate {
            class_name,
            text: out,
            parsed_fields,
            accumulated_size: ctx.accumulated_size(),
        }))
    }

    fn write_header(&self, lines: &[InputLine], signature: &InputLine, ctx: &GenerationContext, out: &mut String) -> String {
        let whole = lines.iter().map(InputLine::text).collect::<Vec<_>>().join("\n");
        let template_hash = self.hasher.fingerprint(&whole);
        let routine_hash = self.hasher.fingerprint(signature.text());

        out.push_str("// generated output for subroutine:\n");
        out.push_str(&format!("// {} -----> hash: {:08X}\n", signature.text(), routine_hash));
        out.push_str(&format!("// hash of whole input: {:08X}\n\n", template_hash));

        let class_name = match ctx.class_name() {
            Some(name) => name.to_string(),
            None => format!("{}{:08X}", self.style.class_prefix, routine_hash),
        };
        out.push_str(&format!("namespace {}\n{{\n", self.style.namespace));
        out.push_str(&format!("\tpublic class {} : {}", class_name, self.style.base_class));
        if let Some(size) = ctx.expected_size() {
            out.push_str(&format!("\t\t// total size: {}", Size::new(size).to_hex()));
        }
        out.push_str("\n\t{\n");
        class_name
    }

    /// Renders one body line and returns whether it produced a field.
    fn emit_line(&self, line: &InputLine, next: Option<&InputLine>, ctx: &mut GenerationContext, out: &mut String) -> bool {
        let origin = origin_comment(line);

        if ctx.take_suppressed() {
            log::debug!("line{}: skipping string terminator, origin: {}", line.number(), line.trimmed());
            out.push_str(&origin);
            return false;
        }
        if Directive::is_directive(line.text()) {
            out.push_str(&origin);
            return false;
        }

        let kind = classify(line.text());
        let Some(emitter) = emitter_for(kind) else {
            log::debug!("line{}: {:<6} | skipping, origin: {}", line.number(), kind, line.trimmed());
            out.push_str(&origin);
            return false;
        };

        let parsed = match emitter.emit(line, next, ctx) {
            Emission::Fields(fields) => {
                log::info!("line{}: {:<6} | found {}, origin: {}", line.number(), kind, kind, line.trimmed());
                out.push_str(&fields);
                ctx.set_previous_line(line);
                if ctx.is_enabled(Behavior::LOG_ACCUMULATED_SIZE) {
                    out.push_str(&accumulated_comment(ctx.accumulated_size()));
                }
                true
            }
            Emission::Comment(comment) => {
                log::info!("line{}: {:<6} | found {}, origin: {}", line.number(), kind, kind, line.trimmed());
                out.push_str(&comment);
                false
            }
            Emission::Skipped(reason) => {
                log::debug!("line{}: {:<6} | skipping {}, origin: {}", line.number(), kind, reason, line.trimmed());
                false
            }
            Emission::Unparsed => {
                log::warn!("line{}: {:<6} | cannot parse, origin: {}", line.number(), kind, line.trimmed());
                false
            }
        };
        out.push_str(&origin);
        parsed
    }

    fn write_summary(&self, ctx: &GenerationContext, parsed_fields: usize, out: &mut String) {
        let accumulated = ctx.accumulated_size();
        match ctx.expected_size() {
            Some(expected) if expected > accumulated => {
                let missing = expected - accumulated;
                let offset = Offset::new(accumulated as i64);
                let padding = Field::new(
                    format!("EndPadding{}", offset.name_suffix()),
                    offset,
                    FieldType::Bytes,
                    Size::new(missing),
                )
                .ignored()
                .with_note(format!("missing {} bytes at the end of the structure", missing))
                .with_detail("comment: auto end padding");
                out.push('\n');
                out.push_str(&padding.to_string());
                out.push_str(&format!("{}// total size matches: {}\n", MEMBER_INDENT, Size::new(expected).to_hex()));
            }
            Some(expected) if expected < accumulated => {
                log::warn!("accumulated size {} exceeds declared size {}", accumulated, expected);
                out.push_str(&format!(
                    "\n{}// WARNING: accumulated size {} exceeds the declared total size {} by {} bytes\n",
                    MEMBER_INDENT,
                    accumulated,
                    expected,
                    accumulated - expected
                ));
            }
            Some(_) => {
                out.push_str(&format!("\n{}// total size matches, no end padding needed\n", MEMBER_INDENT));
            }
            None => {
                out.push_str(&format!(
                    "\n{}// end padding can only be added when the total size is declared with #size\n",
                    MEMBER_INDENT
                ));
            }
        }
        out.push_str(&accumulated_comment(accumulated));
        out.push_str(&format!("{}// parsed fields: {}\n", MEMBER_INDENT, parsed_fields));
        out.push_str("\t}\n}\n");
    }
}

/// A signature line has an argument list and is not a comment or directive.
fn is_signature(text: &str) -> bool {
    let trimmed = text.trim_start();
    text.contains('(') && text.contains(')') && !trimmed.starts_with("//") && !trimmed.starts_with('#')
}

fn origin_comment(line: &InputLine) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{}// line: {}\n", MEMBER_INDENT, line.text())
    }
}

fn accumulated_comment(size: u64) -> String {
    format!("{}// accumulated size: {} ({})\n", MEMBER_INDENT, size, Size::new(size).to_hex())
}
