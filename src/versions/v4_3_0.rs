use crate::catalog::{Category, DocumentationEntry, EditScript, Label, Version};

/// 4.3.0 replaces the Netty-based gRPC page with the new Vert.x gRPC stack,
/// keeps the Netty flavour under its own id, and adds URI templates.
pub fn script() -> EditScript {
    EditScript::new(Version::new(&[4, 3, 0]), Version::new(&[4, 2, 0]))
        .remove("vertx-grpc")
        .insert(
            DocumentationEntry::new(
                "vertx-grpc",
                "Vert.x gRPC",
                "使用 Vert.x 实现 gRPC 客户端和服务器端。",
                Category::Services,
                "/vertx-grpc/java/",
                "https://github.com/eclipse-vertx/vertx-grpc",
            )
            .with_edit(
                "https://github.com/eclipse-vertx/vertx-grpc/tree/master/vertx-grpc-common/src/main/asciidoc",
            )
            .with_label(Label::TechnicalPreview),
        )
        .insert(
            DocumentationEntry::new(
                "vertx-grpc-netty",
                "gRPC Netty",
                "使用 Vert.x 的 gRPC Netty。",
                Category::Services,
                "/vertx-grpc-netty/java/",
                "https://github.com/vert-x3/vertx-grpc",
            )
            .with_examples("https://github.com/vert-x3/vertx-examples/tree/3.x/grpc-examples")
            .with_edit("https://github.com/vert-x3/vertx-grpc/tree/master/vertx-grpc/src/main/asciidoc"),
        )
        .insert(
            DocumentationEntry::new(
                "vertx-uri-template",
                "URI 模版",
                "URI 模版 RFC 的实现。",
                Category::Web,
                "/vertx-uri-template/java/",
                "https://github.com/eclipse-vertx/vertx-uri-template/tree/main/",
            )
            .with_edit(
                "https://github.com/eclipse-vertx/vertx-uri-template/tree/main/src/main/asciidoc",
            )
            .with_label(Label::TechnicalPreview),
        )
}
