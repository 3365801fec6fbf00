// @generated by routegen. Lines between the markers are rewritten on every
// run; add or remove route files instead of editing them.

routegen_runtime::routes! {
    /*MARKER*/
    "/" => Root;
    "/blog/[slug]" => BlogBySlug { slug: ::std::string::String = slug };
    "/docs/[[lang]]/[...path]" => DocsMaybeLangAllPath { lang: ::core::option::Option<::std::string::String> = lang, path: ::std::string::String = path };
    "/files/[file-name]" => FilesByFileName { file_name as "file-name": ::std::string::String = file_name };
    "/kinds/[type]" => KindsByType { r#type: ::std::string::String = r#type };
    "/list/[[page=int]]" => ListMaybePage { page: ::core::option::Option<u32> = page.as_ref().map(::std::string::ToString::to_string) };
    "/me/[self]" => MeBySelf { self_ as "self": ::std::string::String = self_ };
    "/option" => Option2;
    "/search/[query]" => SearchByQuery { query_ as "query": ::std::string::String = query_ };
    "/self" => Self2;
    "/string" => String2;
    /*/MARKER*/
}
