//! Emission of the tuple family and the slot traits.
//!
//! Every tuple type is a struct with one private field per slot plus a phantom mode marker. The
//! structural trait implementations (`PartialEq`, `Ord`, `Hash`, `Display`, `Render`, ...) do not
//! compare or render anything themselves: they hand their slots, in order, to the shared
//! algorithms in `tuplet::structural` and `tuplet::format`.

use {
    proc_macro2::{Literal, TokenStream},
    quote::{quote, ToTokens},
};

use crate::{ordinal::Ordinal, Arity, Family, SlotCount};

impl ToTokens for Family {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for arity in &self.arities {
            arity.to_tokens(tokens);
        }
    }
}

impl ToTokens for Arity {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.name;
        let name_str = name.to_string();
        let mutable_name_str = format!("Mutable{}", name);
        let alias = self.mutable_alias();
        let arity = Literal::usize_unsuffixed(self.len());
        let format = self.canonical_format();
        let params = self.slots.iter().map(|slot| slot.type_param()).collect::<Vec<_>>();
        let fields = self.slots.iter().map(|slot| slot.field()).collect::<Vec<_>>();
        let slots = if self.len() == 1 { "slot" } else { "slots" };

        let struct_doc = format!(
            "An ordered record of {} independently typed {}.\n\n\
             The mode `M` selects the capability profile: [`Fixed`](crate::Fixed) values (the \
             default) never change after construction, while [`Mutable`](crate::Mutable) values \
             (see [`{}`]) can have any slot replaced at any time.",
            self.len(),
            slots,
            alias,
        );
        let alias_doc = format!(
            "A [`{}`] whose slots can be replaced after construction.",
            name
        );
        let of_doc = format!("Construct an immutable [`{}`] from its {}.", name, slots);
        let of_mutable_doc = format!("Construct a [`{}`] from its initial {}.", alias, slots);

        let getters = self.slots.iter().map(|slot| {
            let field = slot.field();
            let param = slot.type_param();
            let doc = format!("The value of the {} slot.", slot.name());
            quote! {
                #[doc = #doc]
                pub fn #field(&self) -> &#param {
                    &self.#field
                }
            }
        });

        let setters = self.slots.iter().map(|slot| {
            let field = slot.field();
            let param = slot.type_param();
            let setter = slot.setter();
            let replacer = slot.replacer();
            let accessor_mut = slot.accessor_mut();
            let set_doc = format!(
                "Replace the value of the {} slot. No other slot is affected.",
                slot.name()
            );
            let replace_doc = format!(
                "Replace the value of the {} slot, returning the previous value.",
                slot.name()
            );
            let mut_doc = format!("A mutable reference to the {} slot.", slot.name());
            quote! {
                #[doc = #set_doc]
                pub fn #setter(&mut self, #field: #param) {
                    self.#field = #field;
                }

                #[doc = #replace_doc]
                pub fn #replacer(&mut self, #field: #param) -> #param {
                    ::core::mem::replace(&mut self.#field, #field)
                }

                #[doc = #mut_doc]
                pub fn #accessor_mut(&mut self) -> &mut #param {
                    &mut self.#field
                }
            }
        });

        let slot_impls = self.slots.iter().map(|slot| slot_impl(self, *slot));

        quote! {
            #[doc = #struct_doc]
            #[derive(Clone, Copy)]
            pub struct #name<#(#params,)* M = crate::Fixed> {
                #(#fields: #params,)*
                mode: ::core::marker::PhantomData<fn() -> M>,
            }

            #[doc = #alias_doc]
            pub type #alias<#(#params),*> = #name<#(#params,)* crate::Mutable>;

            impl<#(#params),*> #name<#(#params),*> {
                #[doc = #of_doc]
                pub fn of(#(#fields: #params),*) -> Self {
                    #name {
                        #(#fields,)*
                        mode: ::core::marker::PhantomData,
                    }
                }
            }

            impl<#(#params),*> #name<#(#params,)* crate::Mutable> {
                #[doc = #of_mutable_doc]
                pub fn of_mutable(#(#fields: #params),*) -> Self {
                    #name {
                        #(#fields,)*
                        mode: ::core::marker::PhantomData,
                    }
                }

                #(#setters)*
            }

            impl<#(#params,)* M: crate::Mode> #name<#(#params,)* M> {
                #(#getters)*

                /// References to every slot, in order.
                pub fn as_refs(&self) -> (#(&#params,)*) {
                    (#(&self.#fields,)*)
                }

                /// Consume the tuple, returning its slots as a standard tuple.
                pub fn into_inner(self) -> (#(#params,)*) {
                    (#(self.#fields,)*)
                }

                /// Convert into the immutable profile, keeping every slot.
                pub fn freeze(self) -> #name<#(#params),*> {
                    #name {
                        #(#fields: self.#fields,)*
                        mode: ::core::marker::PhantomData,
                    }
                }

                /// Convert into the mutable profile, keeping every slot.
                pub fn into_mutable(self) -> #alias<#(#params),*> {
                    #name {
                        #(#fields: self.#fields,)*
                        mode: ::core::marker::PhantomData,
                    }
                }

                /// Compare against another tuple of the same type, lexicographically by slot.
                ///
                /// Returns a negative number, zero, or a positive number as `self` is less than,
                /// equal to, or greater than `other`. Comparing against `None` returns
                /// [`i32::MAX`], whatever the contents of `self`.
                pub fn compare_to(&self, other: ::core::option::Option<&Self>) -> i32
                where
                    #(#params: ::core::cmp::Ord,)*
                {
                    crate::structural::compare_to(self, other)
                }

                /// Structural equality against another tuple of the same type. A tuple is never
                /// equal to `None`.
                pub fn equals(&self, other: ::core::option::Option<&Self>) -> bool
                where
                    #(#params: ::core::cmp::PartialEq,)*
                {
                    crate::structural::equals(self, other)
                }
            }

            impl<#(#params: crate::structural::Render,)* M: crate::Mode> #name<#(#params,)* M> {
                /// Render the slots through a template with positional placeholders (`%1$s`,
                /// `%2$s`, ...) or sequential ones (`%s`). See [`format`](crate::format) for the
                /// full template language. An absent slot renders as `null`.
                pub fn to_string_with(
                    &self,
                    template: &str,
                ) -> ::core::result::Result<::std::string::String, crate::TupleError> {
                    crate::format::render(
                        template,
                        &[#(&self.#fields as &dyn crate::structural::Render,)*],
                    )
                }
            }

            impl<#(#params,)* M: crate::Mode> crate::Tuple for #name<#(#params,)* M> {
                const ARITY: usize = #arity;
                const FORMAT: &'static str = #format;
                type Mode = M;
                type Inner = (#(#params,)*);

                fn into_inner(self) -> Self::Inner {
                    (#(self.#fields,)*)
                }

                fn from_inner((#(#fields,)*): Self::Inner) -> Self {
                    #name {
                        #(#fields,)*
                        mode: ::core::marker::PhantomData,
                    }
                }
            }

            #(#slot_impls)*

            impl<#(#params: ::core::default::Default),*> ::core::default::Default
                for #name<#(#params,)* crate::Mutable>
            {
                fn default() -> Self {
                    #name {
                        #(#fields: ::core::default::Default::default(),)*
                        mode: ::core::marker::PhantomData,
                    }
                }
            }

            impl<#(#params,)* M: crate::Mode> ::core::convert::From<(#(#params,)*)>
                for #name<#(#params,)* M>
            {
                fn from(inner: (#(#params,)*)) -> Self {
                    <Self as crate::Tuple>::from_inner(inner)
                }
            }

            impl<#(#params,)* M: crate::Mode> ::core::convert::From<#name<#(#params,)* M>>
                for (#(#params,)*)
            {
                fn from(tuple: #name<#(#params,)* M>) -> Self {
                    (#(tuple.#fields,)*)
                }
            }

            impl<#(#params: ::core::cmp::PartialEq,)* M: crate::Mode> ::core::cmp::PartialEq
                for #name<#(#params,)* M>
            {
                fn eq(&self, other: &Self) -> bool {
                    crate::structural::all_equal(&[#(
                        &(|| ::core::cmp::PartialEq::eq(&self.#fields, &other.#fields))
                            as &dyn ::core::ops::Fn() -> bool,
                    )*])
                }
            }

            impl<#(#params: ::core::cmp::Eq,)* M: crate::Mode> ::core::cmp::Eq
                for #name<#(#params,)* M>
            {
            }

            impl<#(#params: ::core::cmp::PartialOrd,)* M: crate::Mode> ::core::cmp::PartialOrd
                for #name<#(#params,)* M>
            {
                fn partial_cmp(
                    &self,
                    other: &Self,
                ) -> ::core::option::Option<::core::cmp::Ordering> {
                    crate::structural::partial_lexicographic(&[#(
                        &(|| ::core::cmp::PartialOrd::partial_cmp(&self.#fields, &other.#fields))
                            as &dyn ::core::ops::Fn() -> ::core::option::Option<::core::cmp::Ordering>,
                    )*])
                }
            }

            impl<#(#params: ::core::cmp::Ord,)* M: crate::Mode> ::core::cmp::Ord
                for #name<#(#params,)* M>
            {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    crate::structural::lexicographic(&[#(
                        &(|| ::core::cmp::Ord::cmp(&self.#fields, &other.#fields))
                            as &dyn ::core::ops::Fn() -> ::core::cmp::Ordering,
                    )*])
                }
            }

            impl<#(#params: ::core::hash::Hash,)* M: crate::Mode> ::core::hash::Hash
                for #name<#(#params,)* M>
            {
                fn hash<HashState: ::core::hash::Hasher>(&self, state: &mut HashState) {
                    #(::core::hash::Hash::hash(&self.#fields, state);)*
                }
            }

            impl<#(#params: ::core::fmt::Debug,)* M: crate::Mode> ::core::fmt::Debug
                for #name<#(#params,)* M>
            {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    let name = if <M as crate::Mode>::MUTABLE {
                        #mutable_name_str
                    } else {
                        #name_str
                    };
                    f.debug_tuple(name)
                        #(.field(&self.#fields))*
                        .finish()
                }
            }

            impl<#(#params: crate::structural::Render,)* M: crate::Mode> ::core::fmt::Display
                for #name<#(#params,)* M>
            {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    crate::structural::write_slots(
                        f,
                        &[#(&self.#fields as &dyn crate::structural::Render,)*],
                    )
                }
            }

            impl<#(#params: crate::structural::Render,)* M: crate::Mode> crate::structural::Render
                for #name<#(#params,)* M>
            {
                fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }

            #[cfg(feature = "serde")]
            impl<#(#params: ::serde::Serialize,)* M: crate::Mode> ::serde::Serialize
                for #name<#(#params,)* M>
            {
                fn serialize<Ser: ::serde::Serializer>(
                    &self,
                    serializer: Ser,
                ) -> ::core::result::Result<Ser::Ok, Ser::Error> {
                    ::serde::Serialize::serialize(&(#(&self.#fields,)*), serializer)
                }
            }

            #[cfg(feature = "serde")]
            impl<'de, #(#params: ::serde::Deserialize<'de>,)* M: crate::Mode>
                ::serde::Deserialize<'de> for #name<#(#params,)* M>
            {
                fn deserialize<De: ::serde::Deserializer<'de>>(
                    deserializer: De,
                ) -> ::core::result::Result<Self, De::Error> {
                    <(#(#params,)*) as ::serde::Deserialize<'de>>::deserialize(deserializer)
                        .map(<Self as crate::Tuple>::from_inner)
                }
            }
        }
        .to_tokens(tokens);
    }
}

/// The implementation of one slot trait for one tuple type.
fn slot_impl(arity: &Arity, slot: Ordinal) -> TokenStream {
    let name = &arity.name;
    let params = arity
        .slots
        .iter()
        .map(|slot| slot.type_param())
        .collect::<Vec<_>>();
    let trait_name = slot.trait_name();
    let field = slot.field();
    let param = slot.type_param();
    quote! {
        impl<#(#params,)* M: crate::Mode> crate::slot::#trait_name for #name<#(#params,)* M> {
            type #trait_name = #param;

            fn #field(&self) -> &#param {
                &self.#field
            }
        }
    }
}

/// Emit the slot accessor traits `First`, `Second`, ... up to the given count.
pub fn slot_traits(SlotCount(count): SlotCount) -> TokenStream {
    let mut tokens = TokenStream::new();
    for slot in Ordinal::upto(count).unwrap_or_default() {
        let trait_name = slot.trait_name();
        let field = slot.field();
        let trait_doc = format!(
            "Tuples with a {} slot, i.e. of arity {} or more.",
            slot.name(),
            slot.position()
        );
        let type_doc = format!("The type stored in the {} slot.", slot.name());
        let getter_doc = format!("The value of the {} slot.", slot.name());
        quote! {
            #[doc = #trait_doc]
            pub trait #trait_name {
                #[doc = #type_doc]
                type #trait_name;

                #[doc = #getter_doc]
                fn #field(&self) -> &Self::#trait_name;
            }
        }
        .to_tokens(&mut tokens);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Declaration;

    fn emitted(declaration: &str) -> syn::File {
        let family = syn::parse_str::<Declaration>(declaration)
            .unwrap()
            .to_family()
            .unwrap();
        syn::parse2::<syn::File>(family.into_token_stream()).unwrap()
    }

    #[test]
    fn one_struct_and_alias_per_arity() {
        let file = emitted("Single, Pair");
        let structs = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Struct(s) => Some(s.ident.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>();
        let aliases = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Type(t) => Some(t.ident.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(structs, vec!["Single", "Pair"]);
        assert_eq!(aliases, vec!["MutableSingle", "MutablePair"]);
    }

    #[test]
    fn struct_has_one_field_per_slot_plus_mode() {
        let file = emitted("Single, Pair, Triple");
        let triple = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Struct(s) if s.ident == "Triple" => Some(s.clone()),
                _ => None,
            })
            .unwrap();
        let fields = triple
            .fields
            .iter()
            .map(|field| field.ident.as_ref().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(fields, vec!["first", "second", "third", "mode"]);
        assert_eq!(triple.generics.params.len(), 4);
    }

    #[test]
    fn slot_traits_are_emitted_in_order() {
        let file = syn::parse2::<syn::File>(slot_traits(SlotCount(3))).unwrap();
        let traits = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Trait(t) => Some(t.ident.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(traits, vec!["First", "Second", "Third"]);
    }
}
