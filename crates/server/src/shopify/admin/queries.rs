//! GraphQL documents for the Admin API (2024-10).

pub const SHOP: &str = r"
query TestConnection {
  shop {
    name
    email
    myshopifyDomain
    plan {
      displayName
    }
  }
}
";

// =============================================================================
// Orders
// =============================================================================

pub const ORDERS_WITH_LINE_ITEMS: &str = r"
query OrdersWithLineItems($query: String!, $first: Int!, $after: String) {
  orders(first: $first, query: $query, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    edges {
      node {
        id
        createdAt
        lineItems(first: 50) {
          edges {
            node {
              product {
                id
                title
              }
              quantity
            }
          }
        }
      }
    }
  }
}
";

// =============================================================================
// Collections
// =============================================================================

pub const COLLECTIONS: &str = r"
query GetCollections($first: Int!, $query: String) {
  collections(first: $first, query: $query) {
    edges {
      node {
        id
        title
        handle
        productsCount {
          count
        }
        updatedAt
      }
    }
  }
}
";

const COLLECTION_FIELDS: &str = r"
    id
    title
    handle
    descriptionHtml
    productsCount {
      count
    }
    products(first: $productsFirst, after: $after) {
      edges {
        node {
          id
          title
          handle
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
";

/// `collection(id:)` with one page of products.
#[must_use]
pub fn collection_by_id() -> String {
    format!(
        "query GetCollection($id: ID!, $productsFirst: Int!, $after: String) {{\n  collection(id: $id) {{{COLLECTION_FIELDS}  }}\n}}\n"
    )
}

/// `collectionByHandle(handle:)` with one page of products.
#[must_use]
pub fn collection_by_handle() -> String {
    format!(
        "query GetCollectionByHandle($handle: String!, $productsFirst: Int!, $after: String) {{\n  collectionByHandle(handle: $handle) {{{COLLECTION_FIELDS}  }}\n}}\n"
    )
}

pub const COLLECTION_CREATE: &str = r"
mutation CollectionCreate($input: CollectionInput!) {
  collectionCreate(input: $input) {
    collection {
      id
      handle
      title
    }
    userErrors {
      field
      message
    }
  }
}
";

pub const COLLECTION_ADD_PRODUCTS: &str = r"
mutation CollectionAddProducts($id: ID!, $productIds: [ID!]!) {
  collectionAddProducts(id: $id, productIds: $productIds) {
    collection {
      id
      productsCount {
        count
      }
    }
    userErrors {
      field
      message
    }
  }
}
";

pub const COLLECTION_REORDER_PRODUCTS: &str = r"
mutation CollectionReorderProducts($id: ID!, $moves: [MoveInput!]!) {
  collectionReorderProducts(id: $id, moves: $moves) {
    job {
      id
    }
    userErrors {
      field
      message
    }
  }
}
";

// =============================================================================
// Blogs
// =============================================================================

pub const BLOGS: &str = r"
query GetBlogs($first: Int!) {
  blogs(first: $first) {
    edges {
      node {
        id
        title
        handle
      }
    }
  }
}
";

pub const ARTICLES: &str = r"
query GetArticles($first: Int!, $query: String) {
  articles(first: $first, query: $query) {
    edges {
      node {
        id
        title
        handle
        publishedAt
      }
    }
  }
}
";

pub const ARTICLE_CREATE: &str = r"
mutation ArticleCreate($article: ArticleCreateInput!) {
  articleCreate(article: $article) {
    article {
      id
      handle
      title
    }
    userErrors {
      field
      message
    }
  }
}
";

pub const ARTICLE_UPDATE: &str = r"
mutation ArticleUpdate($id: ID!, $article: ArticleUpdateInput!) {
  articleUpdate(id: $id, article: $article) {
    article {
      id
      handle
      title
    }
    userErrors {
      field
      message
    }
  }
}
";

// =============================================================================
// Menus
// =============================================================================

pub const MENUS: &str = r"
query GetMenus($first: Int!) {
  menus(first: $first) {
    edges {
      node {
        id
        title
        handle
        items {
          id
          title
          type
          url
          resourceId
          items {
            id
            title
            type
            url
            resourceId
          }
        }
      }
    }
  }
}
";

pub const MENU_UPDATE: &str = r"
mutation MenuUpdate($id: ID!, $title: String!, $items: [MenuItemUpdateInput!]!) {
  menuUpdate(id: $id, title: $title, items: $items) {
    menu {
      id
      title
      handle
      items {
        id
        title
        type
        url
        resourceId
      }
    }
    userErrors {
      field
      message
    }
  }
}
";

// =============================================================================
// Products
// =============================================================================

const PRODUCT_FIELDS: &str = r"
    id
    title
    handle
    descriptionHtml
    status
    vendor
    productType
    tags
    createdAt
    updatedAt
    onlineStoreUrl
    seo {
      title
      description
    }
    variants(first: 50) {
      edges {
        node {
          id
          title
          sku
          price
          inventoryQuantity
        }
      }
    }
    images(first: 10) {
      edges {
        node {
          id
          url
          altText
        }
      }
    }
";

#[must_use]
pub fn product_by_id() -> String {
    format!("query GetProduct($id: ID!) {{\n  product(id: $id) {{{PRODUCT_FIELDS}  }}\n}}\n")
}

#[must_use]
pub fn product_by_handle() -> String {
    format!(
        "query GetProductByHandle($handle: String!) {{\n  productByHandle(handle: $handle) {{{PRODUCT_FIELDS}  }}\n}}\n"
    )
}

pub const SEARCH_PRODUCTS: &str = r"
query SearchProducts($query: String, $first: Int!) {
  products(query: $query, first: $first) {
    edges {
      node {
        id
        title
        handle
        status
        vendor
        productType
        createdAt
        updatedAt
      }
    }
    pageInfo {
      hasNextPage
    }
  }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_documents_share_fields() {
        let by_id = collection_by_id();
        let by_handle = collection_by_handle();
        assert!(by_id.contains("collection(id: $id)"));
        assert!(by_handle.contains("collectionByHandle(handle: $handle)"));
        for doc in [&by_id, &by_handle] {
            assert!(doc.contains("products(first: $productsFirst, after: $after)"));
            assert!(doc.contains("endCursor"));
            assert_eq!(doc.matches('{').count(), doc.matches('}').count());
        }
    }

    #[test]
    fn test_product_documents_balanced() {
        for doc in [product_by_id(), product_by_handle()] {
            assert!(doc.contains("variants(first: 50)"));
            assert_eq!(doc.matches('{').count(), doc.matches('}').count());
        }
    }
}
