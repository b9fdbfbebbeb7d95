/// Declares a vocabulary of node kinds.
///
/// For each entry this generates:
/// - a zero-sized tag type implementing [`Tag`](crate::Tag),
/// - [`AcceptsText`](crate::AcceptsText) when `text: true`,
/// - [`Contains`](crate::Contains) for every listed child kind, or for the
///   kinds named in the optional `contains { .. }` clause,
/// - an operations trait implemented for [`Scope`](crate::Scope) of that
///   kind: per attribute a setter `name` and a getter `get_name`, per child
///   operation `op` and its fallible twin `try_op`.
///
/// Several operations may produce the same child kind. Each `Contains` impl
/// can exist only once, so such a kind lists every child kind exactly once in
/// `contains`:
///
/// ```
/// use tagtree::{build, vocabulary};
///
/// vocabulary! {
///     pub Body("body") as BodyOps {
///         text: false;
///         attrs {}
///         children { h => Heading, heading => Heading }
///         contains { Heading }
///     }
///     pub Heading("h1") as HeadingOps { text: true; attrs {} children {} }
/// }
///
/// let tree = build::<Body, _>(|body| {
///     body.h(|h| {
///         h.text("short");
///     });
///     body.heading(|h| {
///         h.text("long");
///     });
/// });
/// assert_eq!(tree.children().len(), 2);
/// ```
///
/// Method names shadowed by inherent `Scope` methods (`attr`, `text`, `child`,
/// `kind`, `get_attr`, ...) are unreachable through method syntax; pick other
/// names.
///
/// ```
/// use tagtree::{build, render, vocabulary};
///
/// vocabulary! {
///     /// Document root.
///     pub Html("html") as HtmlOps {
///         text: false;
///         attrs { lang: "lang" }
///         children { head => Head, body => Body }
///     }
///     pub Head("head") as HeadOps {
///         text: false;
///         attrs {}
///         children { title => Title }
///     }
///     pub Title("title") as TitleOps {
///         text: true;
///         attrs {}
///         children {}
///     }
///     pub Body("body") as BodyOps {
///         text: true;
///         attrs { class: "class" }
///         children { a => A }
///     }
///     pub A("a") as AOps {
///         text: true;
///         attrs { href: "href" }
///         children {}
///     }
/// }
///
/// let page = build::<Html, _>(|html| {
///     html.lang("en");
///     html.head(|head| {
///         head.title(|t| {
///             t.text("Home");
///         });
///     });
///     html.body(|body| {
///         body.a(|a| {
///             a.href("/about").text("About");
///         });
///     });
/// });
/// assert!(render(&page).starts_with("<html lang=\"en\">\n"));
/// ```
#[macro_export]
macro_rules! vocabulary {
    (@text true $tag:ident) => {
        impl $crate::AcceptsText for $tag {}
    };
    (@text false $tag:ident) => {};
    (@contains $tag:ident [contains $( $kind:ident ),*] [$( $child:ident ),*]) => {
        $( impl $crate::Contains<$kind> for $tag {} )*
    };
    (@contains $tag:ident [] [$( $child:ident ),*]) => {
        $( impl $crate::Contains<$child> for $tag {} )*
    };
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $tag:ident ( $kind:literal ) as $ops:ident {
                text: $text:tt;
                attrs { $( $attr:ident : $attr_name:literal ),* $(,)? }
                children { $( $method:ident => $child:ident ),* $(,)? }
                $( contains { $( $contained:ident ),* $(,)? } )?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $tag;

            impl $crate::Tag for $tag {
                const KIND: &'static str = $kind;
            }

            $crate::vocabulary!(@text $text $tag);

            $crate::vocabulary!(
                @contains $tag
                [$( contains $( $contained ),* )?]
                [$( $child ),*]
            );

            $crate::__private::paste! {
                #[doc = concat!("Operations available inside a `", $kind, "` block.")]
                $vis trait $ops {
                    $(
                        #[doc = concat!("Sets the `", $attr_name, "` attribute.")]
                        fn $attr(&mut self, value: impl Into<String>) -> &mut Self;

                        #[doc = concat!("Current value of the `", $attr_name, "` attribute.")]
                        fn [<get_ $attr>](&self) -> Option<&str>;
                    )*
                    $(
                        #[doc = concat!("Builds and attaches a `", stringify!($child), "` child.")]
                        fn $method<F>(&mut self, block: F) -> $crate::Scope<'_, $child>
                        where
                            F: FnOnce(&mut $crate::Scope<'_, $child>);

                        #[doc = concat!("Fallible `", stringify!($method), "`; nothing is attached on error.")]
                        fn [<try_ $method>]<E, F>(
                            &mut self,
                            block: F,
                        ) -> Result<$crate::Scope<'_, $child>, E>
                        where
                            F: FnOnce(&mut $crate::Scope<'_, $child>) -> Result<(), E>;
                    )*
                }

                impl $ops for $crate::Scope<'_, $tag> {
                    $(
                        fn $attr(&mut self, value: impl Into<String>) -> &mut Self {
                            self.attr($attr_name, value)
                        }

                        fn [<get_ $attr>](&self) -> Option<&str> {
                            self.get_attr($attr_name)
                        }
                    )*
                    $(
                        fn $method<F>(&mut self, block: F) -> $crate::Scope<'_, $child>
                        where
                            F: FnOnce(&mut $crate::Scope<'_, $child>),
                        {
                            self.child::<$child, F>(block)
                        }

                        fn [<try_ $method>]<E, F>(
                            &mut self,
                            block: F,
                        ) -> Result<$crate::Scope<'_, $child>, E>
                        where
                            F: FnOnce(&mut $crate::Scope<'_, $child>) -> Result<(), E>,
                        {
                            self.try_child::<$child, E, F>(block)
                        }
                    )*
                }
            }
        )*
    };
}
