//! Vocabularies shared by the integration tests.
#![allow(dead_code)]

use tagtree::vocabulary;

vocabulary! {
    /// Minimal document used by the end-to-end rendering checks.
    pub Doc("doc") as DocOps {
        text: true;
        attrs {}
        children { section => Section }
    }
    pub Section("section") as SectionOps {
        text: true;
        attrs { id: "id" }
        children { section => Section }
    }
}

vocabulary! {
    pub Html("html") as HtmlOps {
        text: false;
        attrs { lang: "lang" }
        children { head => Head, body => Body }
    }
    pub Head("head") as HeadOps {
        text: false;
        attrs {}
        children { title => Title }
    }
    pub Title("title") as TitleOps {
        text: true;
        attrs {}
        children {}
    }
    pub Body("body") as BodyOps {
        text: true;
        attrs { class: "class", id: "id" }
        children { h1 => H1, heading => H1, p => P, a => A, div => Div }
        contains { H1, P, A, Div }
    }
    pub Div("div") as DivOps {
        text: true;
        attrs { class: "class" }
        children { div => Div, p => P }
    }
    pub H1("h1") as H1Ops {
        text: true;
        attrs {}
        children {}
    }
    pub P("p") as POps {
        text: true;
        attrs { class: "class" }
        children { a => A, b => B }
    }
    pub A("a") as AOps {
        text: true;
        attrs { href: "href" }
        children { b => B }
    }
    pub B("b") as BOps {
        text: true;
        attrs {}
        children {}
    }
}
