//! Deterministic single-line rendering of packets.
//!
//! The text form is `{TypeName 0xFINGERPRINT name=value ...}` with one
//! fragment per field that differs from its default, in wire order. It is
//! meant for logs and golden-file comparisons, not for parsing.

use core::fmt::{self, Display, Write as _};

use crate::narrow::NarrowInt;
use crate::packet::{AnyPacket, Packet, WireEnum};

/// Full text form of a packet: type name, fingerprint and non-default fields.
pub fn packet_text<P: Packet + ?Sized>(packet: &P, type_name: &str) -> String {
    let mut out = FieldWriter::new();
    packet.render_fields(&mut out);
    format!("{{{} {}{}}}", type_name, packet.fingerprint(), out.as_str())
}

/// Accumulates ` name=value` fragments, skipping default values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldWriter {
    buf: String,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn begin(&mut self, name: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push('=');
    }

    fn push_display(&mut self, value: impl Display) {
        // writing into a String cannot fail
        let _ = write!(self.buf, "{value}");
    }

    pub fn boolean(&mut self, name: &str, value: bool) {
        if value {
            self.begin(name);
            self.buf.push('1');
        }
    }

    /// Integers and floats, rendered with their `Display` form.
    pub fn scalar<T: Display + Default + PartialEq>(&mut self, name: &str, value: T) {
        if value != T::default() {
            self.begin(name);
            self.push_display(value);
        }
    }

    /// Narrow integer declared unsigned in the schema.
    pub fn unsigned<T>(&mut self, name: &str, value: T)
    where
        T: NarrowInt,
        T::Unsigned: Display + Default + PartialEq,
    {
        self.scalar(name, value.as_unsigned());
    }

    pub fn string(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.begin(name);
            self.push_quoted(value);
        }
    }

    pub fn enumeration<E: WireEnum>(&mut self, name: &str, value: E) {
        if value.ordinal() != 0 {
            self.begin(name);
            self.buf.push_str(value.variant_name());
        }
    }

    /// Nested packet, rendered through its own full text form.
    pub fn packet<P: Packet + ?Sized>(&mut self, name: &str, value: Option<&P>) {
        if let Some(packet) = value {
            self.begin(name);
            self.buf.push_str(&packet.to_text());
        }
    }

    pub fn sequence<T: Display>(&mut self, name: &str, type_name: &str, items: &[T]) {
        self.render_sequence(name, type_name, items, |out, item| out.push_display(item));
    }

    pub fn unsigned_sequence<T>(&mut self, name: &str, type_name: &str, items: &[T])
    where
        T: NarrowInt,
        T::Unsigned: Display,
    {
        self.render_sequence(name, type_name, items, |out, item| {
            out.push_display(item.as_unsigned())
        });
    }

    pub fn bool_sequence(&mut self, name: &str, items: &[bool]) {
        self.render_sequence(name, "bool", items, |out, item| {
            out.buf.push(if *item { '1' } else { '0' })
        });
    }

    /// Empty elements leave their slot blank.
    pub fn string_sequence<S: AsRef<str>>(&mut self, name: &str, items: &[S]) {
        self.render_sequence(name, "string", items, |out, item| {
            let item = item.as_ref();
            if !item.is_empty() {
                out.push_quoted(item);
            }
        });
    }

    pub fn enum_sequence<E: WireEnum>(&mut self, name: &str, items: &[E]) {
        self.render_sequence(name, E::NAME, items, |out, item| {
            out.buf.push_str(item.variant_name())
        });
    }

    /// Elements render their fields only, without type name or fingerprint.
    pub fn packet_sequence<P: Packet>(&mut self, name: &str, type_name: &str, items: &[P]) {
        self.render_sequence(name, type_name, items, |out, item| item.render_fields(out));
    }

    pub fn any_sequence(&mut self, name: &str, items: &[AnyPacket]) {
        self.render_sequence(name, "packet", items, |out, item| item.render_fields(out));
    }

    fn push_quoted(&mut self, value: &str) {
        self.buf.push('"');
        self.buf.push_str(value);
        self.buf.push('"');
    }

    fn render_sequence<T>(
        &mut self,
        name: &str,
        type_name: &str,
        items: &[T],
        mut render: impl FnMut(&mut Self, &T),
    ) {
        if items.is_empty() {
            return;
        }

        self.begin(name);
        self.push_display(format_args!("{{{} *{}", type_name, items.len()));
        for item in items {
            self.buf.push('|');
            render(self, item);
        }
        self.buf.push('}');
    }
}

impl fmt::Display for FieldWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
